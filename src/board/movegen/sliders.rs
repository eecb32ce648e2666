use super::super::{Board, Move, Piece, Square};

impl Board {
    /// Walks each ray in `dirs` until it runs off the board or hits a
    /// piece, emitting quiet moves along the way and a capture when the
    /// blocking piece belongs to the opponent.
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        dirs: &[(isize, isize)],
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dr, df) in dirs {
            let mut sq = from;
            while let Some(to) = sq.offset(dr, df) {
                sq = to;
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(Move::new(from, to, piece, Some(target)));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
