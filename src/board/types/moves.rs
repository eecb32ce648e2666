//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A chess move with all the data needed to apply or undo it.
///
/// `piece` and `capture` are snapshots taken before the move executes, so
/// undo can restore exact `has_moved` flags. Castling carries the rook
/// relocation; en passant carries the square of the captured pawn (which is
/// not the destination square).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood on `from` before the move
    pub piece: Piece,
    /// The captured piece as it stood before the move, if any
    pub capture: Option<Piece>,
    /// Promotion kind chosen by the caller, filled in before application
    pub promotion: Option<PieceKind>,
    /// True for pawn moves reaching the far rank; the promotion kind is
    /// supplied externally, never by the generator
    pub needs_promotion: bool,
    pub is_castling: bool,
    pub rook_from: Option<Square>,
    pub rook_to: Option<Square>,
    pub is_en_passant: bool,
    /// Square the en-passant-captured pawn actually stood on
    pub captured_pawn_square: Option<Square>,
    pub is_double_pawn_push: bool,
}

impl Move {
    /// Create a plain relocation or capture move
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece, capture: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            capture,
            promotion: None,
            needs_promotion: false,
            is_castling: false,
            rook_from: None,
            rook_to: None,
            is_en_passant: false,
            captured_pawn_square: None,
            is_double_pawn_push: false,
        }
    }

    /// Create a double pawn push
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square, piece: Piece) -> Self {
        let mut m = Move::new(from, to, piece, None);
        m.is_double_pawn_push = true;
        m
    }

    /// Create a castling move (king relocation plus rook relocation)
    #[must_use]
    pub const fn castling(from: Square, to: Square, piece: Piece, rook_from: Square, rook_to: Square) -> Self {
        let mut m = Move::new(from, to, piece, None);
        m.is_castling = true;
        m.rook_from = Some(rook_from);
        m.rook_to = Some(rook_to);
        m
    }

    /// Create an en passant capture; `capture` is the enemy pawn on `captured_pawn_square`
    #[must_use]
    pub const fn en_passant(
        from: Square,
        to: Square,
        piece: Piece,
        capture: Piece,
        captured_pawn_square: Square,
    ) -> Self {
        let mut m = Move::new(from, to, piece, Some(capture));
        m.is_en_passant = true;
        m.captured_pawn_square = Some(captured_pawn_square);
        m
    }

    /// Copy of this move with `needs_promotion` set
    #[must_use]
    pub(crate) const fn promoting(mut self) -> Self {
        self.needs_promotion = true;
        self
    }

    /// Copy of this move with the externally chosen promotion kind attached
    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
