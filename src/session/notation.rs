//! Move list text for display.

use crate::board::{GameStatus, Move, PieceKind};

use super::Session;

impl Session {
    /// Formats a just-committed move for a move list: piece letter
    /// (blank for pawns), origin, `x` for captures or `–` otherwise,
    /// destination, the current check or mate symbol, and finally any
    /// `=Q`-style promotion suffix.
    ///
    /// The check symbol reflects the session's current status, so this
    /// is meant to be called right after [`Session::apply_move`] with
    /// the move that was applied.
    #[must_use]
    pub fn move_text(&self, m: &Move) -> String {
        let mut text = String::new();
        if m.piece.kind != PieceKind::Pawn {
            text.push(m.piece.kind.to_char().to_ascii_uppercase());
        }
        text.push_str(&m.from.to_string());
        text.push(if m.is_capture() { 'x' } else { '–' });
        text.push_str(&m.to.to_string());
        match self.status() {
            GameStatus::Checkmate => text.push('#'),
            GameStatus::Check => text.push('+'),
            GameStatus::Normal | GameStatus::Stalemate => {}
        }
        if let Some(kind) = m.promotion {
            text.push('=');
            text.push(kind.to_char().to_ascii_uppercase());
        }
        text
    }
}
