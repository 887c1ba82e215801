//! The 8x8 grid of cells.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Contents of one cell: empty, or a (color, kind) pair.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid indexed by `Square(row, col)`.
///
/// The grid knows nothing about rules. Outside the crate it is read-only;
/// all mutation goes through `Position`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some((Color::Black, piece));
            board.cells[1][col] = Some((Color::Black, Piece::Pawn));
            board.cells[6][col] = Some((Color::White, Piece::Pawn));
            board.cells[7][col] = Some((Color::White, piece));
        }
        board
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.0][sq.1] = cell;
    }

    /// Empty `sq` and return what was there
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1].take()
    }

    /// Raw rows, row 0 first
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Every occupied square with its piece, in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Number of pieces of the given color and kind
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = match cell {
                    Some((color, piece)) => piece.to_fen_char(*color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
