use super::super::attacks::KNIGHT_STEPS;
use super::super::{Board, Move, Piece, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        for &to in &KNIGHT_STEPS[from.as_index()] {
            match self.piece_at(to) {
                Some(target) if target.color == piece.color => {}
                target => moves.push(Move::new(from, to, piece, target)),
            }
        }
        moves
    }
}
