//! Save and restore boundary for a session.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move};

use super::{CapturedPieces, Session};

/// The five fields a saved game needs, and nothing else. Status is
/// derived again on load rather than stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub history: Vec<Move>,
    pub last_move: Option<Move>,
    pub captured: CapturedPieces,
}

impl Session {
    /// Copies the boundary fields out for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            history: self.history.clone(),
            last_move: self.last_move,
            captured: self.captured.clone(),
        }
    }

    /// Rebuilds a playable session from a snapshot. The position is
    /// reclassified rather than trusting anything beyond the stored
    /// fields, so a game saved mid-check comes back in check.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Session {
        let status = snapshot
            .board
            .classify(snapshot.side_to_move, snapshot.last_move.as_ref());
        Session {
            board: snapshot.board,
            side_to_move: snapshot.side_to_move,
            last_move: snapshot.last_move,
            history: snapshot.history,
            captured: snapshot.captured,
            status,
        }
    }
}
