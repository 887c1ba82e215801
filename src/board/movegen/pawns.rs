use super::super::{Color, Piece, Position, Square, SquareSet};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                moves.insert(one);
                if from.0 == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.board.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.get(target) {
                Some((occupant, _)) if occupant != color => moves.insert(target),
                None if self.en_passant_target == Some(target)
                    && self.board.get(Square(from.0, target.1))
                        == Some((color.opponent(), Piece::Pawn)) =>
                {
                    moves.insert(target);
                }
                _ => {}
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Position, Square};

    #[test]
    fn test_blocked_pawn_has_no_double_step() {
        // Knight on e3 blocks the e2 pawn entirely
        let pos = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(pos.pseudo_legal_moves(Square(6, 4)).is_empty());
    }

    #[test]
    fn test_double_step_needs_empty_destination() {
        let pos = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(pos.pseudo_legal_moves(Square(6, 4)).to_vec(), vec![Square(5, 4)]);
    }

    #[test]
    fn test_pawn_does_not_capture_forward_or_friendly() {
        let pos = Position::from_fen("4k3/8/8/3pp3/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(pos.pseudo_legal_moves(Square(4, 4)).to_vec(), vec![Square(3, 3)]);
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let pos = Position::new();
        assert_eq!(
            pos.pseudo_legal_moves(Square(1, 3)).to_vec(),
            vec![Square(2, 3), Square(3, 3)]
        );
    }

    #[test]
    fn test_en_passant_destination() {
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let moves = pos.pseudo_legal_moves(Square(3, 4));
        assert!(moves.contains(Square(2, 3)));
        assert!(moves.contains(Square(2, 4)));
        assert_eq!(moves.len(), 2);
    }
}
