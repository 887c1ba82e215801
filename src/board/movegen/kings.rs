use super::super::attack_tables::KING_TARGETS;
use super::super::{CastleSide, Color, Piece, Position, Square, SquareSet};

impl Position {
    /// King steps plus castle destinations whose path is safe: the king may
    /// not castle out of, through, or into check.
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = self.step_moves(&KING_TARGETS, from, color);
        let castles = self.castling_destinations(from);
        if castles.is_empty() || self.is_square_attacked(color, from) {
            return moves;
        }

        for dest in castles {
            let step = if dest.1 > from.1 { 1 } else { -1 };
            let path_safe = (1..=2)
                .filter_map(|n| from.offset(0, step * n))
                .all(|sq| !self.is_square_attacked(color, sq));
            if path_safe {
                moves.insert(dest);
            }
        }
        moves
    }

    /// Castle destinations for the king on `sq`, from rights and emptiness alone.
    ///
    /// A destination is offered when the king stands on its home square, the
    /// right for that wing is intact, the wing's rook is in its corner and
    /// every square strictly between king and rook is empty. Attacked squares
    /// are not considered here.
    #[must_use]
    pub fn castling_destinations(&self, sq: Square) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let Some((color, Piece::King)) = self.board.get(sq) else {
            return moves;
        };
        let row = color.back_rank();
        if sq != Square(row, 4) {
            return moves;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_col = side.rook_home_col();
            if self.board.get(Square(row, rook_col)) != Some((color, Piece::Rook)) {
                continue;
            }
            let (lo, hi) = (rook_col.min(4) + 1, rook_col.max(4));
            if (lo..hi).all(|col| self.board.is_empty(Square(row, col))) {
                moves.insert(Square(row, side.king_dest_col()));
            }
        }
        moves
    }
}
