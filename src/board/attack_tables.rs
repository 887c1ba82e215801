//! Direction tables and precomputed leaper targets.

use once_cell::sync::Lazy;

use super::{Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(offsets: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *slot = offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

/// On-board knight destinations from each square, ignoring occupancy
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

/// On-board king step destinations from each square, ignoring occupancy
pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| leaper_table(&ALL_DIRECTIONS));
