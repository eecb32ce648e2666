//! Property-based tests using proptest.

use crate::board::{Color, GameStatus, PROMOTION_KINDS};
use crate::session::Session;
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Plays up to `max_moves` random legal moves, attaching a random
/// promotion kind where one is required. Returns how many were played.
fn random_playout(session: &mut Session, seed: u64, max_moves: usize) -> usize {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = 0;
    for _ in 0..max_moves {
        let moves = session.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mut m = moves[rng.gen_range(0..moves.len())];
        if m.needs_promotion {
            m = m.with_promotion(PROMOTION_KINDS[rng.gen_range(0..PROMOTION_KINDS.len())]);
        }
        session.apply_move(&m);
        played += 1;
    }
    played
}

proptest! {
    /// Property: a legal move never leaves the mover's own king in check
    #[test]
    fn prop_legal_moves_never_self_check(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut session = Session::new();
        random_playout(&mut session, seed, num_moves);

        let color = session.side_to_move();
        for m in session.all_legal_moves() {
            let mut probe = session.board().clone();
            probe.apply_move(&m);
            prop_assert!(!probe.is_king_in_check(color),
                "Legal move left own king in check: {}", m);
        }
    }

    /// Property: one undo reverses one apply exactly
    #[test]
    fn prop_single_undo_reverses_apply(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = session.all_legal_moves();
            if moves.is_empty() {
                break;
            }
            let before_board = session.board().clone();
            let before_side = session.side_to_move();
            let before_history = session.history().len();

            let mut m = moves[rng.gen_range(0..moves.len())];
            if m.needs_promotion {
                m = m.with_promotion(PROMOTION_KINDS[rng.gen_range(0..PROMOTION_KINDS.len())]);
            }
            session.apply_move(&m);

            let mut probe = session.clone();
            prop_assert_eq!(probe.undo_move(), Some(m));
            prop_assert_eq!(probe.board(), &before_board);
            prop_assert_eq!(probe.side_to_move(), before_side);
            prop_assert_eq!(probe.history().len(), before_history);
        }
    }

    /// Property: undoing every move restores the starting session
    #[test]
    fn prop_full_undo_restores_start(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut session = Session::new();
        let played = random_playout(&mut session, seed, num_moves);

        for _ in 0..played {
            prop_assert!(session.undo_move().is_some());
        }

        let fresh = Session::new();
        prop_assert_eq!(session.board(), fresh.board());
        prop_assert_eq!(session.side_to_move(), Color::White);
        prop_assert_eq!(session.status(), GameStatus::Normal);
        prop_assert!(session.history().is_empty());
        prop_assert!(session.captured().of(Color::White).is_empty());
        prop_assert!(session.captured().of(Color::Black).is_empty());
    }

    /// Property: snapshot round-trip preserves the playable state
    #[test]
    fn prop_snapshot_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut session = Session::new();
        random_playout(&mut session, seed, num_moves);

        let restored = Session::from_snapshot(session.snapshot());
        prop_assert_eq!(restored.board(), session.board());
        prop_assert_eq!(restored.side_to_move(), session.side_to_move());
        prop_assert_eq!(restored.status(), session.status());
        prop_assert_eq!(restored.all_legal_moves(), session.all_legal_moves());
    }

    /// Property: status agrees with check state and available moves
    #[test]
    fn prop_status_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut session = Session::new();
        random_playout(&mut session, seed, num_moves);

        let in_check = session.board().is_king_in_check(session.side_to_move());
        let any_moves = !session.all_legal_moves().is_empty();
        let expected = match (in_check, any_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        };
        prop_assert_eq!(session.status(), expected);
    }
}
