#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::{History, Snapshot};
use super::{Board, Cell, CastlingRights, Color, Piece, Square};

/// Terminal classification of a position, computed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Winning color, if the game ended in checkmate
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Lowercase tag used by text boundaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Checkmate { .. } => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }
}

/// A game position: the grid plus side to move, castling rights, en passant
/// target and the undo history.
///
/// After construction the position only changes through `apply`, `undo` and
/// `reset`.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: History,
}

impl Position {
    /// The standard starting position with White to move
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            history: History::new(),
        }
    }

    pub(crate) fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            history: History::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn skipped over on the immediately preceding double advance
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Number of applied moves that can still be undone
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Cell {
        self.board.get(sq)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.board
            .pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    #[must_use]
    pub fn king_count(&self, color: Color) -> usize {
        self.board.count(color, Piece::King)
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            castling_rights: self.castling_rights,
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.castling_rights = snapshot.castling_rights;
        self.side_to_move = snapshot.side_to_move;
        self.en_passant_target = snapshot.en_passant_target;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Positions compare by their current state; history is not part of identity.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Position {}
