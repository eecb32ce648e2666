use super::super::{Board, Move, Piece, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, piece: Piece, last: Option<&Move>) -> Vec<Move> {
        let color = piece.color;
        let mut moves = Vec::new();
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        // Forward pushes: single, then double from the starting rank only
        // when the intermediate square was empty too
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(from, forward, piece, None));
                if from.rank() == start_rank {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::double_pawn_push(from, double, piece));
                        }
                    }
                }
            }
        }

        // Diagonal captures
        for df in [-1, 1] {
            if let Some(to) = from.offset(dir, df) {
                if let Some(target) = self.piece_at(to) {
                    if target.color != color {
                        moves.push(Move::new(from, to, piece, Some(target)));
                    }
                }
            }
        }

        // En passant: only on the ply immediately after an enemy double
        // push landing adjacent on the mover's rank. The captured pawn
        // sits on its own square, not on the destination.
        if let Some(last) = last {
            if last.is_double_pawn_push
                && last.piece.color != color
                && last.to.rank() == from.rank()
                && last.to.file().abs_diff(from.file()) == 1
            {
                if let Some(captured) = self.piece_at(last.to) {
                    if let Some(to) = last.to.offset(dir, 0) {
                        moves.push(Move::en_passant(from, to, piece, captured, last.to));
                    }
                }
            }
        }

        // Far-rank arrivals wait for an externally chosen promotion kind
        for m in &mut moves {
            if m.to.rank() == promotion_rank {
                *m = m.promoting();
            }
        }

        moves
    }
}
