use std::sync::Arc;
use std::thread;

use chess_rules::board::{Color, GameStatus, HistoryError, MoveError, Piece, Position, Square};
use chess_rules::session::{Game, SessionRegistry};

#[test]
fn rejected_moves_leave_game_untouched() {
    let mut game = Game::new();
    let before = game.state();

    assert_eq!(
        game.play_move(Square(7, 1), Square(5, 1), None),
        Err(MoveError::IllegalMove {
            from: Square(7, 1),
            to: Square(5, 1)
        })
    );
    assert_eq!(
        game.play_move(Square(0, 6), Square(2, 5), None),
        Err(MoveError::NotYourTurn {
            to_move: Color::White
        })
    );
    assert_eq!(
        game.play_move(Square(4, 4), Square(3, 4), None),
        Err(MoveError::IllegalMove {
            from: Square(4, 4),
            to: Square(3, 4)
        })
    );
    assert_eq!(game.state(), before);
}

#[test]
fn state_tracks_history_and_castling() {
    let mut game = Game::new();
    let state = game.state();
    assert_eq!(state.turn, Color::White);
    assert_eq!(state.history_len, 0);
    assert_eq!(state.castling, [true; 4]);
    assert_eq!(state.status, GameStatus::InProgress);

    game.play_move(Square(6, 7), Square(4, 7), None).unwrap();
    game.play_move(Square(1, 0), Square(3, 0), None).unwrap();
    game.play_move(Square(7, 7), Square(5, 7), None).unwrap();
    let state = game.state();
    assert_eq!(state.turn, Color::Black);
    assert_eq!(state.history_len, 3);
    assert_eq!(state.castling, [false, true, true, true]);

    game.undo().unwrap();
    assert_eq!(game.state().castling, [true; 4]);
}

#[test]
fn checkmate_is_reported_with_winner() {
    let mut game = Game::new();
    for (from, to) in [
        (Square(6, 5), Square(5, 5)),
        (Square(1, 4), Square(3, 4)),
        (Square(6, 6), Square(4, 6)),
    ] {
        let outcome = game.play_move(from, to, None).unwrap();
        assert_eq!(outcome.status, GameStatus::InProgress);
    }
    let outcome = game.play_move(Square(0, 3), Square(4, 7), None).unwrap();
    assert_eq!(
        outcome.status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(outcome.status.winner(), Some(Color::Black));
    assert!(game.legal_moves(Square(7, 4)).is_empty());
}

#[test]
fn capture_is_reported() {
    let mut game = Game::new();
    game.play_move(Square(6, 4), Square(4, 4), None).unwrap();
    game.play_move(Square(1, 3), Square(3, 3), None).unwrap();
    let outcome = game.play_move(Square(4, 4), Square(3, 3), None).unwrap();
    assert_eq!(outcome.captured, Some((Color::Black, Piece::Pawn)));
}

#[test]
fn promotion_ignored_on_ordinary_moves() {
    let mut game = Game::new();
    let outcome = game
        .play_move(Square(6, 4), Square(4, 4), Some(Piece::Knight))
        .unwrap();
    assert_eq!(outcome.played.promotion, None);
}

#[test]
fn undo_on_fresh_game_fails_cleanly() {
    let mut game = Game::new();
    assert_eq!(game.undo(), Err(HistoryError::Empty));
    assert_eq!(game.state(), Game::new().state());
}

#[test]
fn reset_after_custom_start() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let mut game = Game::from_position(position);
    game.play_move(Square(7, 4), Square(7, 6), None).unwrap();
    game.reset();
    assert_eq!(game.position(), &Position::new());
}

#[test]
fn concurrent_sessions_do_not_interfere() {
    let registry = Arc::new(SessionRegistry::new());
    let mut handles = Vec::new();

    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            let (id, game) = registry.create();
            for (from, to) in [
                (Square(6, 4), Square(4, 4)),
                (Square(1, 4), Square(3, 4)),
                (Square(7, 6), Square(5, 5)),
            ] {
                game.lock().play_move(from, to, None).unwrap();
            }
            id
        }));
    }

    let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(registry.len(), 4);
    for id in ids {
        let game = registry.get(id).unwrap();
        let mut game = game.lock();
        assert_eq!(game.state().history_len, 3);
        assert_eq!(game.state().turn, Color::Black);
    }
}

#[test]
fn shared_game_serializes_requests() {
    let registry = SessionRegistry::new();
    let (id, game) = registry.create();
    let other = registry.get(id).unwrap();

    let worker = thread::spawn(move || {
        let mut game = other.lock();
        game.legal_moves(Square(6, 4)).len()
    });
    game.lock().play_move(Square(6, 3), Square(4, 3), None).unwrap();

    // Either the query ran first (white to move, two pushes) or after (black to move, none)
    let seen = worker.join().unwrap();
    assert!(seen == 2 || seen == 0);
    assert_eq!(game.lock().state().history_len, 1);
}

#[cfg(feature = "serde")]
#[test]
fn state_serializes_to_json() {
    let mut game = Game::new();
    game.play_move(Square(6, 4), Square(4, 4), None).unwrap();
    let json = serde_json::to_value(game.state()).unwrap();
    assert_eq!(json["history_len"], 1);
    assert_eq!(json["status"], "InProgress");
    let back: chess_rules::session::GameState = serde_json::from_value(json).unwrap();
    assert_eq!(back, game.state());
}
