use super::{Board, Move};

impl Board {
    /// Plays `m` on the board, updating piece placement only. The mover
    /// (and a castling rook) lands with `has_moved` set, a promotion
    /// swaps the pawn's kind, and en passant clears the captured pawn
    /// from its own square rather than the destination.
    pub fn apply_move(&mut self, m: &Move) {
        let Some(mut mover) = self.remove_piece(m.from) else {
            return;
        };
        mover.has_moved = true;
        if let Some(kind) = m.promotion {
            mover.kind = kind;
        }
        self.set_piece(m.to, mover);

        if m.is_castling {
            if let (Some(rook_from), Some(rook_to)) = (m.rook_from, m.rook_to) {
                if let Some(mut rook) = self.remove_piece(rook_from) {
                    rook.has_moved = true;
                    self.set_piece(rook_to, rook);
                }
            }
        }

        if m.is_en_passant {
            if let Some(captured_square) = m.captured_pawn_square {
                self.remove_piece(captured_square);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Move, Piece, PieceKind, Square};

    #[test]
    fn test_apply_quiet_move() {
        let mut board = Board::new();
        let pawn = board.piece_at(Square(1, 4)).unwrap();
        board.apply_move(&Move::new(Square(1, 4), Square(2, 4), pawn, None));

        assert!(board.is_empty(Square(1, 4)));
        let moved = board.piece_at(Square(2, 4)).unwrap();
        assert_eq!(moved.kind, PieceKind::Pawn);
        assert!(moved.has_moved);
    }

    #[test]
    fn test_apply_capture_replaces_target() {
        let mut board = Board::empty();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let enemy = Piece::new(Color::Black, PieceKind::Bishop);
        board.set_piece(Square(3, 3), knight);
        board.set_piece(Square(5, 4), enemy);

        board.apply_move(&Move::new(Square(3, 3), Square(5, 4), knight, Some(enemy)));

        assert!(board.is_empty(Square(3, 3)));
        let moved = board.piece_at(Square(5, 4)).unwrap();
        assert_eq!(moved.kind, PieceKind::Knight);
        assert_eq!(moved.color, Color::White);
    }

    #[test]
    fn test_apply_castling_moves_rook() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R");
        let king = board.piece_at(Square(0, 4)).unwrap();
        board.apply_move(&Move::castling(
            Square(0, 4),
            Square(0, 6),
            king,
            Square(0, 7),
            Square(0, 5),
        ));

        assert_eq!(board.piece_at(Square(0, 6)).unwrap().kind, PieceKind::King);
        let rook = board.piece_at(Square(0, 5)).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(board.is_empty(Square(0, 4)));
        assert!(board.is_empty(Square(0, 7)));
    }

    #[test]
    fn test_apply_en_passant_clears_captured_pawn() {
        let mut board = Board::empty();
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        board.set_piece(Square(4, 4), white_pawn);
        board.set_piece(Square(4, 3), black_pawn);

        board.apply_move(&Move::en_passant(
            Square(4, 4),
            Square(5, 3),
            white_pawn,
            black_pawn,
            Square(4, 3),
        ));

        assert!(board.is_empty(Square(4, 4)));
        assert!(board.is_empty(Square(4, 3)));
        assert_eq!(board.piece_at(Square(5, 3)).unwrap().kind, PieceKind::Pawn);
    }

    #[test]
    fn test_apply_promotion_swaps_kind() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.set_piece(Square(6, 0), pawn);

        let m = Move::new(Square(6, 0), Square(7, 0), pawn, None)
            .with_promotion(PieceKind::Queen);
        board.apply_move(&m);

        let promoted = board.piece_at(Square(7, 0)).unwrap();
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);
    }
}
