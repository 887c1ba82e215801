pub mod board;
pub mod protocol;
pub mod session;

pub use board::{Color, GameStatus, Move, Piece, Position, Square};
pub use session::{Game, SessionRegistry};
