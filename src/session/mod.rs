//! Stateful game session.
//!
//! A [`Session`] owns everything a running game needs: the board, the
//! side to move, the move history, and the captured-piece lists. The
//! rules themselves live in [`crate::board`]; this module strings them
//! together so a caller only ever asks for legal moves, commits one,
//! or takes one back.
//!
//! # Example
//! ```
//! use chess_rules::session::Session;
//! use chess_rules::board::Square;
//!
//! let mut session = Session::new();
//! let moves = session.legal_moves_from(Square(1, 4));
//! session.apply_move(&moves[0]);
//! assert_eq!(session.history().len(), 1);
//! ```

mod notation;
mod snapshot;

pub use snapshot::Snapshot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, GameStatus, Move, PieceKind, Square};

/// Captured pieces grouped by the color of the piece that was taken,
/// in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl CapturedPieces {
    /// The captured pieces of the given color.
    #[must_use]
    pub fn of(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn list_mut(&mut self, color: Color) -> &mut Vec<PieceKind> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// A playable game. Legality checks run on board clones, so the live
/// position is never disturbed by speculation.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    side_to_move: Color,
    last_move: Option<Move>,
    history: Vec<Move>,
    captured: CapturedPieces,
    status: GameStatus,
}

impl Session {
    /// Starts a fresh game from the standard starting position with
    /// White to move.
    #[must_use]
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            side_to_move: Color::White,
            last_move: None,
            history: Vec::new(),
            captured: CapturedPieces::default(),
            status: GameStatus::Normal,
        }
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// Legal moves for the piece on `from`. Empty when the square is
    /// empty or holds a piece of the side not on move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.board
            .legal_moves_from(from, self.side_to_move, self.last_move.as_ref())
    }

    /// Every legal move for the side on move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .all_legal_moves(self.side_to_move, self.last_move.as_ref())
    }

    /// Commits `m`, which must have come from [`Self::legal_moves_from`]
    /// for the current side. Moves flagged `needs_promotion` must have
    /// had a kind attached with [`Move::with_promotion`] first.
    ///
    /// Returns the status of the position the opponent now faces.
    pub fn apply_move(&mut self, m: &Move) -> GameStatus {
        if let Some(capture) = m.capture {
            self.captured.list_mut(capture.color).push(capture.kind);
        }
        self.board.apply_move(m);
        self.history.push(*m);
        self.last_move = Some(*m);
        self.side_to_move = self.side_to_move.opponent();
        self.status = self
            .board
            .classify(self.side_to_move, self.last_move.as_ref());

        #[cfg(feature = "logging")]
        log::debug!(
            "applied {m}, {} to move, status {}",
            self.side_to_move,
            self.status
        );

        self.status
    }

    /// Takes back the most recent move and returns it, or `None` when
    /// the history is empty. Undo works after checkmate or stalemate
    /// too, reopening the game.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.history.pop()?;

        if let Some(capture) = m.capture {
            self.captured.list_mut(capture.color).pop();
        }

        // The move record carries the mover's pre-move snapshot, so
        // promotion and first-move tracking rewind along with it. An
        // en passant victim goes back to its own square, not the
        // destination.
        self.board.remove_piece(m.to);
        if m.is_en_passant {
            if let (Some(capture), Some(square)) = (m.capture, m.captured_pawn_square) {
                self.board.set_piece(square, capture);
            }
        } else if let Some(capture) = m.capture {
            self.board.set_piece(m.to, capture);
        }
        self.board.set_piece(m.from, m.piece);

        if m.is_castling {
            if let (Some(rook_from), Some(rook_to)) = (m.rook_from, m.rook_to) {
                if let Some(mut rook) = self.board.remove_piece(rook_to) {
                    rook.has_moved = false;
                    self.board.set_piece(rook_from, rook);
                }
            }
        }

        self.side_to_move = self.side_to_move.opponent();
        self.last_move = self.history.last().copied();
        self.status = self
            .board
            .classify(self.side_to_move, self.last_move.as_ref());

        #[cfg(feature = "logging")]
        log::debug!("undid {m}, {} to move again", self.side_to_move);

        Some(m)
    }

    /// The winner after checkmate, `None` in every other state.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if self.status == GameStatus::Checkmate {
            Some(self.side_to_move.opponent())
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
