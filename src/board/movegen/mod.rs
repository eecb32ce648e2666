//! Move generation and legality filtering.
//!
//! Generation is per piece, dispatched by kind. Legality filtering clones
//! the board, applies the candidate, and rejects it if the mover's own
//! king is left attacked; the live board is never touched.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_DIRS, STRAIGHT_DIRS};
use super::{Board, Color, Move, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves for the piece on `from`.
    ///
    /// `last` is the previously played move, consulted only for en
    /// passant. Returns an empty list for an empty square.
    #[must_use]
    pub fn pseudo_moves_from(&self, from: Square, last: Option<&Move>) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece, last),
            PieceKind::Knight => self.knight_moves(from, piece),
            PieceKind::Bishop => self.sliding_moves(from, piece, &DIAGONAL_DIRS),
            PieceKind::Rook => self.sliding_moves(from, piece, &STRAIGHT_DIRS),
            PieceKind::Queen => {
                let mut moves = self.sliding_moves(from, piece, &STRAIGHT_DIRS);
                moves.extend(self.sliding_moves(from, piece, &DIAGONAL_DIRS));
                moves
            }
            PieceKind::King => self.king_moves(from, piece),
        }
    }

    /// Legal moves for the piece of `color` on `from`.
    ///
    /// Returns an empty list if the square is empty or holds the other
    /// color's piece. Result order is the generator's enumeration order.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, color: Color, last: Option<&Move>) -> Vec<Move> {
        match self.piece_at(from) {
            Some(piece) if piece.color == color => {}
            _ => return Vec::new(),
        }

        self.pseudo_moves_from(from, last)
            .into_iter()
            .filter(|m| {
                let mut probe = self.clone();
                probe.apply_move(m);
                !probe.is_king_in_check(color)
            })
            .collect()
    }

    /// Legal moves for every piece of `color`, in board scan order
    /// (rank ascending, then file ascending).
    #[must_use]
    pub fn all_legal_moves(&self, color: Color, last: Option<&Move>) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if self.color_on(from) == Some(color) {
                    moves.extend(self.legal_moves_from(from, color, last));
                }
            }
        }
        moves
    }
}
