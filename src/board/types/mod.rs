//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `SquareSet` - 64-bit set of squares used for destination queries
//! - `Board` - the 8x8 grid of cells
//! - `Move` - from/to pair with an optional promotion choice
//! - `CastlingRights` - the four castling flags

mod castling;
mod grid;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastleSide, CastlingRights};
pub use grid::{Board, Cell};
pub use moves::Move;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
