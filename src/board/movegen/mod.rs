//! Move generation and the legality oracle.
//!
//! Pseudo-legal generation is dispatched per piece kind; legality is decided
//! by playing the move on the live position, asking whether the mover's king
//! is attacked, and undoing it again.

mod kings;
mod leapers;
mod pawns;
mod sliders;

use self::sliders::slider_directions;
use super::{Color, GameStatus, Move, Piece, Position, Square, SquareSet, PROMOTION_PIECES};

impl Position {
    /// Destinations reachable by the piece on `sq` by its movement rules alone.
    ///
    /// The mover's own king safety is not considered, except that king
    /// castles are only offered when the king does not start on, pass
    /// through, or land on an attacked square. Empty squares yield nothing.
    #[must_use]
    pub fn pseudo_legal_moves(&self, sq: Square) -> SquareSet {
        let Some((color, piece)) = self.board.get(sq) else {
            return SquareSet::EMPTY;
        };
        match piece {
            Piece::Pawn => self.pawn_moves(sq, color),
            Piece::Knight => self.knight_moves(sq, color),
            Piece::King => self.king_moves(sq, color),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.sliding_moves(sq, color, slider_directions(piece))
            }
        }
    }

    /// Pseudo-legal destinations of the piece on `sq` that do not leave its
    /// own king attacked.
    ///
    /// Each candidate is applied and undone, so the position is observably
    /// unchanged on return. Turn order is not checked.
    pub fn legal_moves(&mut self, sq: Square) -> SquareSet {
        let Some((color, _)) = self.board.get(sq) else {
            return SquareSet::EMPTY;
        };
        self.pseudo_legal_moves(sq)
            .iter()
            .filter(|&to| self.leaves_king_safe(Move::new(sq, to), color))
            .collect()
    }

    /// Every legal (from, to) pair for the pieces of `color`, by origin square
    /// in row-major order.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for from in self.origins(color) {
            for to in self.legal_moves(from) {
                moves.push((from, to));
            }
        }
        moves
    }

    /// Legal moves for the side to move, with each promoting pawn move
    /// expanded into one move per promotion piece.
    pub fn legal_move_list(&mut self) -> Vec<Move> {
        let color = self.side_to_move;
        let mut moves = Vec::new();
        for (from, to) in self.all_legal_moves(color) {
            let promotes = self.board.get(from) == Some((color, Piece::Pawn))
                && to.0 == color.pawn_promotion_rank();
            if promotes {
                moves.extend(
                    PROMOTION_PIECES
                        .iter()
                        .map(|&piece| Move::with_promotion(from, to, piece)),
                );
            } else {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// `color` is in check and has no legal move
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// `color` is not in check and has no legal move
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Terminal classification for the side to move
    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        if self.has_legal_move(color) {
            GameStatus::InProgress
        } else if self.is_in_check(color) {
            GameStatus::Checkmate {
                winner: color.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`, promotions counted
    /// once per piece choice.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_move_list();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply(mv);
            nodes += self.perft(depth - 1);
            self.undo().expect("undo after apply");
        }
        nodes
    }

    fn has_legal_move(&mut self, color: Color) -> bool {
        self.origins(color)
            .into_iter()
            .any(|from| !self.legal_moves(from).is_empty())
    }

    fn origins(&self, color: Color) -> Vec<Square> {
        self.board
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(sq, _, _)| sq)
            .collect()
    }

    fn leaves_king_safe(&mut self, mv: Move, color: Color) -> bool {
        self.apply(mv);
        let safe = !self.is_in_check(color);
        self.undo().expect("undo after apply");
        safe
    }
}
