use super::error::HistoryError;
use super::{Board, CastleSide, Color, Move, Piece, Position, Square};

impl Position {
    /// Apply `mv`, pushing an undo snapshot first.
    ///
    /// Legality is not checked here: callers take moves from `legal_moves`
    /// (or go through `Game::play_move`). The side to move is toggled even if
    /// the moving piece belongs to the other color.
    ///
    /// # Panics
    ///
    /// Panics if `mv.from` is empty, which means the caller's position and
    /// move list have diverged.
    pub fn apply(&mut self, mv: Move) -> &Board {
        self.history.push(self.snapshot());
        self.make_move(mv);
        &self.board
    }

    /// Restore the state from before the most recent `apply`.
    pub fn undo(&mut self) -> Result<&Board, HistoryError> {
        let snapshot = self.history.pop().ok_or(HistoryError::Empty)?;
        self.restore(snapshot);
        Ok(&self.board)
    }

    /// Back to the starting position with empty history and full castling rights.
    pub fn reset(&mut self) {
        *self = Position::new();
    }

    /// Mechanical effect of one move on the grid and state flags.
    fn make_move(&mut self, mv: Move) {
        let (color, piece) = self.board.take(mv.from).expect("make_move 'from' empty");
        let previous_en_passant = self.en_passant_target.take();

        if piece == Piece::Pawn
            && self.board.is_empty(mv.to)
            && mv.from.1 != mv.to.1
            && previous_en_passant == Some(mv.to)
        {
            // The pawn being taken sits beside the mover, on the row it started from.
            self.board.set(Square(mv.from.0, mv.to.1), None);
        }

        if let Some((captured_color, Piece::Rook)) = self.board.get(mv.to) {
            self.forfeit_rook_wing(captured_color, mv.to);
        }

        let mut placed = piece;
        match piece {
            Piece::King => {
                if mv.col_delta() == 2 {
                    let side = if mv.to.1 > mv.from.1 {
                        CastleSide::Kingside
                    } else {
                        CastleSide::Queenside
                    };
                    let rook_from = Square(mv.from.0, side.rook_home_col());
                    let rook_to = Square(mv.from.0, side.rook_castled_col());
                    let rook = self.board.take(rook_from);
                    self.board.set(rook_to, rook);
                }
                self.castling_rights.remove_color(color);
            }
            Piece::Rook => self.forfeit_rook_wing(color, mv.from),
            Piece::Pawn => {
                if mv.row_delta() == 2
                    && mv.from.1 == mv.to.1
                    && mv.from.0 == color.pawn_start_rank()
                {
                    let skipped = (mv.from.0 + mv.to.0) / 2;
                    self.en_passant_target = Some(Square(skipped, mv.from.1));
                }
                if mv.to.0 == color.pawn_promotion_rank() {
                    placed = mv.promotion_piece();
                }
            }
            _ => {}
        }

        self.board.set(mv.to, Some((color, placed)));
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Drop the castling right tied to a rook standing on (or leaving) `sq`.
    fn forfeit_rook_wing(&mut self, color: Color, sq: Square) {
        if sq.0 != color.back_rank() {
            return;
        }
        if let Some(side) = CastleSide::from_rook_col(sq.1) {
            self.castling_rights.remove(color, side);
        }
    }
}
