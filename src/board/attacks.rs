//! Attack detection.
//!
//! `is_square_attacked` is the one shared primitive behind check detection
//! and castling's path-safety rule. It never consults whose turn it is,
//! only the supplied attacker color.

use once_cell::sync::Lazy;

use super::{Board, Color, PieceKind, Square};

/// Knight leap targets for each square, bounds pre-checked
pub(crate) static KNIGHT_STEPS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
});

/// King step targets for each square, bounds pre-checked
pub(crate) static KING_STEPS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
});

/// Orthogonal ray directions as (rank delta, file delta)
pub(crate) const STRAIGHT_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions as (rank delta, file delta)
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Returns true if any piece of `attacker` attacks `target`.
    ///
    /// Checks pawns, then knights, then sliders, then kings, and
    /// short-circuits on the first match.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, attacker: Color) -> bool {
        // Pawns attack diagonally forward, so the attacking pawns sit one
        // rank behind the target relative to the attacker's direction
        let dir = attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = target.offset(-dir, df) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker && piece.kind == PieceKind::Pawn {
                        return true;
                    }
                }
            }
        }

        for &sq in &KNIGHT_STEPS[target.as_index()] {
            if let Some(piece) = self.piece_at(sq) {
                if piece.color == attacker && piece.kind == PieceKind::Knight {
                    return true;
                }
            }
        }

        // Sliders: walk each ray outward; only the first piece hit matters
        for (dirs, diagonal) in [(STRAIGHT_DIRS, false), (DIAGONAL_DIRS, true)] {
            for (dr, df) in dirs {
                let mut sq = target;
                while let Some(next) = sq.offset(dr, df) {
                    sq = next;
                    if let Some(piece) = self.piece_at(sq) {
                        if piece.color == attacker {
                            let hits = if diagonal {
                                piece.kind.attacks_diagonally()
                            } else {
                                piece.kind.attacks_straight()
                            };
                            if hits {
                                return true;
                            }
                        }
                        break;
                    }
                }
            }
        }

        for &sq in &KING_STEPS[target.as_index()] {
            if let Some(piece) = self.piece_at(sq) {
                if piece.color == attacker && piece.kind == PieceKind::King {
                    return true;
                }
            }
        }

        false
    }

    /// Locate the king of `color` by board scan
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == color && piece.kind == PieceKind::King {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    /// Returns true if the king of `color` is attacked.
    ///
    /// A board with no king of that color reports not-in-check; that
    /// denotes an invalid or test position, not a crash condition.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
