use super::super::attacks::KING_STEPS;
use super::super::{Board, Move, Piece, PieceKind, Square};

impl Board {
    pub(crate) fn king_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let color = piece.color;
        for &to in &KING_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some(target) if target.color == color => {}
                target => moves.push(Move::new(from, to, piece, target)),
            }
        }

        // Castling: king unmoved on its home square and not currently in
        // check, rook unmoved on its corner, every square between them
        // empty, and the squares the king crosses or lands on unattacked.
        let back_rank = color.back_rank();
        let enemy = color.opponent();
        if from == Square(back_rank, 4) && !piece.has_moved && !self.is_king_in_check(color) {
            let kingside_rook = Square(back_rank, 7);
            if self.has_castling_rook(kingside_rook, piece)
                && self.is_empty(Square(back_rank, 5))
                && self.is_empty(Square(back_rank, 6))
                && !self.is_square_attacked(Square(back_rank, 5), enemy)
                && !self.is_square_attacked(Square(back_rank, 6), enemy)
            {
                moves.push(Move::castling(
                    from,
                    Square(back_rank, 6),
                    piece,
                    kingside_rook,
                    Square(back_rank, 5),
                ));
            }

            let queenside_rook = Square(back_rank, 0);
            if self.has_castling_rook(queenside_rook, piece)
                && self.is_empty(Square(back_rank, 1))
                && self.is_empty(Square(back_rank, 2))
                && self.is_empty(Square(back_rank, 3))
                && !self.is_square_attacked(Square(back_rank, 2), enemy)
                && !self.is_square_attacked(Square(back_rank, 3), enemy)
            {
                moves.push(Move::castling(
                    from,
                    Square(back_rank, 2),
                    piece,
                    queenside_rook,
                    Square(back_rank, 3),
                ));
            }
        }

        moves
    }

    fn has_castling_rook(&self, corner: Square, king: Piece) -> bool {
        matches!(
            self.piece_at(corner),
            Some(rook)
                if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        )
    }
}
