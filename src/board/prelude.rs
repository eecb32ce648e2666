//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, Color, FenError, GameStatus, Move, Piece, PieceKind, Square, SquareError,
};
