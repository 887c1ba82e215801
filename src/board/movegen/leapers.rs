use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// Table destinations from `from` that are not occupied by `color`
    pub(crate) fn step_moves(&self, table: &[SquareSet; 64], from: Square, color: Color) -> SquareSet {
        table[from.as_index()]
            .iter()
            .filter(|&to| self.board.color_on(to) != Some(color))
            .collect()
    }

    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> SquareSet {
        self.step_moves(&KNIGHT_TARGETS, from, color)
    }
}
