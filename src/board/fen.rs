//! Piece-placement parsing and export.
//!
//! Only the placement field of Forsyth-Edwards notation is supported:
//! ranks 8 down to 1, `/`-separated, digits for empty-file runs, letters
//! for pieces with uppercase meaning White. A full FEN string is tolerated
//! on input; everything after the first whitespace is ignored.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Piece, Square};

/// Placement string for the standard starting position
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a board from a piece-placement string.
    ///
    /// Returns an error for unrecognized characters or ranks that do not
    /// describe exactly 8 files; a partially populated board is never
    /// produced.
    pub fn try_from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let placement = placement.split_whitespace().next().unwrap_or("");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank, file), piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles { rank, files: file });
            }
        }

        Ok(board)
    }

    /// Parse a board from a piece-placement string.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_placement` for
    /// fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid placement string")
    }

    /// Convert the board contents to a piece-placement string.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}
