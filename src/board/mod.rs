//! Chess board representation and rules.
//!
//! A `Position` owns the 8x8 grid, side to move, castling rights, en passant
//! target and an undo history. Move generation filters pseudo-legal
//! destinations by playing each candidate and checking whether the mover's
//! king is left attacked. Castling, en passant and promotion are supported.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Move, Position, Square};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves(Square(6, 4));
//! assert_eq!(moves.to_vec(), vec![Square(4, 4), Square(5, 4)]);
//!
//! position.apply(Move::new(Square(6, 4), Square(4, 4)));
//! assert_eq!(position.side_to_move(), Color::Black);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, HistoryError, MoveError, MoveParseError, SetupError, SquareError};
pub use state::{GameStatus, Position};
pub use types::{
    Board, CastleSide, CastlingRights, Cell, Color, Move, Piece, Square, SquareSet,
    SquareSetIter, PROMOTION_PIECES,
};
