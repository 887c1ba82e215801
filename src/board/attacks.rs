//! Attack detection: which squares the opponent could reach.

use super::attack_tables::{DIAGONAL, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL};
use super::{Color, Piece, Position, Square};

impl Position {
    /// Returns true if a piece of `color`'s opponent attacks `sq`.
    ///
    /// Pins and turn order are ignored. Sliding attacks stop at the first
    /// occupied square along each line.
    #[must_use]
    pub fn is_square_attacked(&self, color: Color, sq: Square) -> bool {
        let enemy = color.opponent();
        let enemy_has = |target: Square, kinds: &[Piece]| {
            matches!(self.board.get(target), Some((c, p)) if c == enemy && kinds.contains(&p))
        };

        if KNIGHT_TARGETS[sq.as_index()]
            .iter()
            .any(|from| enemy_has(from, &[Piece::Knight]))
        {
            return true;
        }

        if KING_TARGETS[sq.as_index()]
            .iter()
            .any(|from| enemy_has(from, &[Piece::King]))
        {
            return true;
        }

        let ray_hits = |directions: &[(isize, isize)], kinds: &[Piece]| {
            directions.iter().any(|&(dr, dc)| {
                let mut cur = sq.offset(dr, dc);
                while let Some(target) = cur {
                    if !self.board.is_empty(target) {
                        return enemy_has(target, kinds);
                    }
                    cur = target.offset(dr, dc);
                }
                false
            })
        };
        if ray_hits(&ORTHOGONAL, &[Piece::Rook, Piece::Queen]) {
            return true;
        }
        if ray_hits(&DIAGONAL, &[Piece::Bishop, Piece::Queen]) {
            return true;
        }

        // An enemy pawn attacks sq from one row behind it, relative to the pawn's advance.
        let back = -enemy.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|dc| sq.offset(back, dc))
            .any(|from| enemy_has(from, &[Piece::Pawn]))
    }

    /// Returns true if `color`'s king is attacked. A position without that
    /// king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(color, king_sq),
            None => false,
        }
    }
}
