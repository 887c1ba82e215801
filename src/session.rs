//! Game sessions: the call surface used by front ends and request handlers.
//!
//! A `Game` wraps one `Position` and re-validates every submitted move, so
//! the rules core never sees an illegal or out-of-turn move from here.
//! `SessionRegistry` owns any number of independent games, each behind its own
//! lock; holding the lock for one operation keeps the legality filter's
//! apply/undo cycle from interleaving with other requests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, Cell, Color, GameStatus, HistoryError, Move, MoveError, Piece, Position, Square,
    SquareSet,
};

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// The move as applied, promotion choice included when one was given
    pub played: Move,
    /// Piece removed from the board, including a pawn taken en passant
    pub captured: Cell,
    /// Status for the side now to move
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Human readable acknowledgement
    #[must_use]
    pub const fn message(&self) -> &'static str {
        "move made"
    }
}

/// Snapshot of everything a front end needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub history_len: usize,
    /// White kingside, white queenside, black kingside, black queenside
    pub castling: [bool; 4],
    pub status: GameStatus,
}

/// One game in progress.
#[derive(Clone, Debug, Default)]
pub struct Game {
    position: Position,
}

impl Game {
    /// A fresh game from the starting position
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::new(),
        }
    }

    /// Continue from an arbitrary position
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Game { position }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Submit a move.
    ///
    /// The destination is checked against the legal moves of the piece on
    /// `from` first, then the piece's color against the side to move. On
    /// rejection the position is untouched. A missing promotion choice on a
    /// promoting move means queen.
    pub fn play_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        if !self.position.legal_moves(from).contains(to) {
            #[cfg(feature = "logging")]
            log::debug!("rejected {from}{to}: not a legal move");
            return Err(MoveError::IllegalMove { from, to });
        }
        let Some((color, piece)) = self.position.piece_at(from) else {
            return Err(MoveError::IllegalMove { from, to });
        };
        let to_move = self.position.side_to_move();
        if color != to_move {
            #[cfg(feature = "logging")]
            log::debug!("rejected {from}{to}: {to_move} to move");
            return Err(MoveError::NotYourTurn { to_move });
        }

        let captured = match self.position.piece_at(to) {
            None if piece == Piece::Pawn && from.1 != to.1 => {
                self.position.piece_at(Square(from.0, to.1))
            }
            occupant => occupant,
        };
        let promotes = piece == Piece::Pawn && to.0 == color.pawn_promotion_rank();
        let played = Move {
            from,
            to,
            promotion: promotion.filter(|_| promotes),
        };
        self.position.apply(played);
        let status = self.position.status();

        #[cfg(feature = "logging")]
        {
            log::debug!("{color} played {played}");
            if status.is_over() {
                log::info!("game over: {}", status.as_str());
            }
        }

        Ok(MoveOutcome {
            played,
            captured,
            status,
        })
    }

    /// Legal destinations for the piece on `sq`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on move.
    pub fn legal_moves(&mut self, sq: Square) -> SquareSet {
        match self.position.piece_at(sq) {
            Some((color, _)) if color == self.position.side_to_move() => {
                self.position.legal_moves(sq)
            }
            _ => SquareSet::EMPTY,
        }
    }

    pub fn status(&mut self) -> GameStatus {
        self.position.status()
    }

    pub fn state(&mut self) -> GameState {
        GameState {
            board: *self.position.board(),
            turn: self.position.side_to_move(),
            history_len: self.position.history_len(),
            castling: self.position.castling_rights().flags(),
            status: self.position.status(),
        }
    }

    /// Take back the last move
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.position.undo()?;
        #[cfg(feature = "logging")]
        log::debug!("undo, {} moves remain", self.position.history_len());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.position.reset();
        #[cfg(feature = "logging")]
        log::info!("game reset");
    }
}

/// A game shared between request handlers.
pub type SharedGame = Arc<Mutex<Game>>;

/// Identifier handed out by `SessionRegistry::create`.
pub type SessionId = u64;

/// Owner of independent game sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    next_id: AtomicU64,
    games: Mutex<HashMap<SessionId, SharedGame>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game from the standard position
    pub fn create(&self) -> (SessionId, SharedGame) {
        self.insert(Game::new())
    }

    /// Register an existing game under a fresh id
    pub fn insert(&self, game: Game) -> (SessionId, SharedGame) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let shared = Arc::new(Mutex::new(game));
        self.games.lock().insert(id, Arc::clone(&shared));
        #[cfg(feature = "logging")]
        log::info!("session {id} created");
        (id, shared)
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<SharedGame> {
        self.games.lock().get(&id).cloned()
    }

    /// Drop a session; handles already held keep working
    pub fn remove(&self, id: SessionId) -> Option<SharedGame> {
        let removed = self.games.lock().remove(&id);
        #[cfg(feature = "logging")]
        if removed.is_some() {
            log::info!("session {id} removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}
