//! Board state: the 8x8 grid and its accessors.
//!
//! The board is pure data. Move legality, attack detection, and move
//! application live in their own modules; nothing here knows the rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// An 8x8 chess board: a grid of optional pieces indexed `[rank][file]`.
///
/// `Clone` produces a fully independent copy, safe for speculative
/// mutation during legality checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a board with the standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(Color::White, *kind));
            board.set_piece(Square(7, file), Piece::new(Color::Black, *kind));
            board.set_piece(Square(1, file), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(6, file), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank()][square.file()]
    }

    /// Place a piece on a square, replacing whatever was there
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[square.rank()][square.file()] = Some(piece);
    }

    /// Remove and return the piece on a square
    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank()][square.file()].take()
    }

    /// Returns true if the square has no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Get the color of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
