use super::super::attack_tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::super::{Color, Piece, Position, Square, SquareSet};

/// Ray directions for the sliding pieces; empty for everything else
pub(crate) const fn slider_directions(piece: Piece) -> &'static [(isize, isize)] {
    match piece {
        Piece::Bishop => &DIAGONAL,
        Piece::Rook => &ORTHOGONAL,
        Piece::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

impl Position {
    /// Walk each ray outward until the edge or the first occupied square.
    /// An enemy piece on that square is included; a friendly one is not.
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut cur = from.offset(dr, dc);
            while let Some(to) = cur {
                match self.board.color_on(to) {
                    None => {
                        moves.insert(to);
                        cur = to.offset(dr, dc);
                    }
                    Some(occupant) => {
                        if occupant != color {
                            moves.insert(to);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }
}
