use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, Square};

/// Outcome of classifying a position for the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Returns `true` when no further moves are expected.
    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Checkmate | Self::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Check => "check",
            Self::Checkmate => "checkmate",
            Self::Stalemate => "stalemate",
        };
        write!(f, "{s}")
    }
}

impl Board {
    /// Classifies the position for `color`, the side about to move.
    /// Check with no legal reply is checkmate; no reply without check
    /// is stalemate.
    pub fn classify(&self, color: Color, last: Option<&Move>) -> GameStatus {
        let in_check = self.is_king_in_check(color);
        let any_moves = (0..8).any(|rank| {
            (0..8).any(|file| !self.legal_moves_from(Square(rank, file), color, last).is_empty())
        });

        match (in_check, any_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, GameStatus};

    #[test]
    fn test_classify_starting_position_normal() {
        let board = Board::new();
        assert_eq!(board.classify(Color::White, None), GameStatus::Normal);
        assert_eq!(board.classify(Color::Black, None), GameStatus::Normal);
    }

    #[test]
    fn test_classify_check_with_escapes() {
        let board = Board::from_placement("4k3/8/8/8/8/8/4R3/4K3");
        assert_eq!(board.classify(Color::Black, None), GameStatus::Check);
    }

    #[test]
    fn test_classify_fools_mate_checkmate() {
        let board =
            Board::from_placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
        assert_eq!(board.classify(Color::White, None), GameStatus::Checkmate);
    }

    #[test]
    fn test_classify_stalemate() {
        let board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8");
        assert_eq!(board.classify(Color::Black, None), GameStatus::Stalemate);
    }

    #[test]
    fn test_game_over_flags() {
        assert!(GameStatus::Checkmate.is_game_over());
        assert!(GameStatus::Stalemate.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
        assert!(!GameStatus::Normal.is_game_over());
    }
}
