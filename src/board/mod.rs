//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 mailbox of optional pieces. Supports full chess
//! rules including castling, en passant, and promotions, with legality
//! checked by playing each candidate on a cloned board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Color::White, None);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod attacks;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, SquareError};
pub use fen::STARTING_PLACEMENT;
pub use state::Board;
pub use status::GameStatus;
pub use types::{Color, Move, Piece, PieceKind, Square, PROMOTION_KINDS};
