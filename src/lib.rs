//! Chess rules engine for embedding in a UI.
//!
//! The crate answers three questions for a host interface: which moves
//! are legal, what the board looks like after one, and whether the game
//! has ended. Everything the host needs to persist fits in a
//! [`session::Snapshot`]. Rendering, input handling, and storage belong
//! to the caller.
//!
//! # Example
//! ```
//! use chess_rules::{GameStatus, Session, Square};
//!
//! let mut session = Session::new();
//! let moves = session.legal_moves_from(Square(1, 4));
//! let status = session.apply_move(&moves[0]);
//! assert_eq!(status, GameStatus::Normal);
//! ```

pub mod board;
pub mod session;

pub use board::{Board, Color, GameStatus, Move, Piece, PieceKind, Square};
pub use session::{CapturedPieces, Session, Snapshot};
