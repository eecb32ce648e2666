//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `Color`, `PieceKind`, and `Piece` - colors, piece kinds, and pieces
//! - `Square` - board square as (rank, file)
//! - `Move` - full move record with side-effect data

mod moves;
mod piece;
mod square;

// Re-export all public types
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;
