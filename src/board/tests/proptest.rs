//! Property-based tests using proptest.

use crate::board::{Color, Move, Piece, Position};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, stopping early at a terminal position
fn random_playout(pos: &mut Position, rng: &mut StdRng, num_moves: usize) -> Vec<Move> {
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = pos.legal_move_list();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.apply(mv);
        played.push(mv);
    }
    played
}

proptest! {
    /// Property: apply followed by undo restores the position exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        random_playout(&mut pos, &mut rng, num_moves);
        let snapshot = pos.clone();
        let fen = pos.to_fen();

        for mv in pos.legal_move_list() {
            pos.apply(mv);
            pos.undo().unwrap();
            prop_assert_eq!(&pos, &snapshot, "apply/undo of {} changed the position", mv);
        }
        prop_assert_eq!(pos.to_fen(), fen);
    }

    /// Property: undoing a whole playout returns to the start
    #[test]
    fn prop_undo_all_returns_to_start(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let played = random_playout(&mut pos, &mut rng, num_moves);
        prop_assert_eq!(pos.history_len(), played.len());
        for _ in 0..played.len() {
            pos.undo().unwrap();
        }
        prop_assert_eq!(pos, Position::new());
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        random_playout(&mut pos, &mut rng, num_moves);
        let restored = Position::from_fen(&pos.to_fen());
        prop_assert_eq!(restored, pos);
    }

    /// Property: legal moves never leave the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = pos.legal_move_list();
            if moves.is_empty() {
                break;
            }

            let current_color = pos.side_to_move();
            for mv in &moves {
                pos.apply(*mv);
                prop_assert!(!pos.is_in_check(current_color),
                    "Legal move left king in check: {}", mv);
                pos.undo().unwrap();
            }

            pos.apply(moves[rng.gen_range(0..moves.len())]);
        }
    }

    /// Property: every reachable position has exactly one king per color
    #[test]
    fn prop_one_king_per_color(seed in seed_strategy(), num_moves in 0..40usize) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.legal_move_list();
            if moves.is_empty() {
                break;
            }
            pos.apply(moves[rng.gen_range(0..moves.len())]);
            prop_assert_eq!(pos.king_count(Color::White), 1);
            prop_assert_eq!(pos.king_count(Color::Black), 1);
        }
    }

    /// Property: checkmate and stalemate are exclusive and both mean no legal move
    #[test]
    fn prop_terminal_states_exclusive(seed in seed_strategy(), num_moves in 0..60usize) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        random_playout(&mut pos, &mut rng, num_moves);
        for color in Color::BOTH {
            let mate = pos.is_checkmate(color);
            let stale = pos.is_stalemate(color);
            prop_assert!(!(mate && stale));
            if mate || stale {
                prop_assert!(pos.all_legal_moves(color).is_empty());
            }
        }
    }

    /// Property: the en passant target exists only right after a double pawn push
    #[test]
    fn prop_en_passant_lifetime(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.legal_move_list();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let double_push = matches!(pos.piece_at(mv.from), Some((_, Piece::Pawn)))
                && mv.row_delta() == 2;
            pos.apply(mv);
            prop_assert_eq!(pos.en_passant_target().is_some(), double_push);
        }
    }
}
