//! Legal move generation.
//!
//! Moves are whole successor boards rather than from/to pairs: each legal
//! move clones the parent position and applies the move to the clone. The
//! driver picks one of those boards as the new position, so there is no
//! unmake step anywhere in the engine.

use super::state::Board;
use super::tables::{self, CaptureMode};
use super::types::{Color, Piece, Square, PROMOTION_PIECES};

/// Upper bound on legal moves in any chess position, counting each
/// promotion choice separately.
pub(crate) const MAX_MOVES: usize = 218;

impl Board {
    /// All legal successor boards for the side to move, in a fixed scan
    /// order: squares top-left to bottom-right, each piece's vectors in
    /// catalog order, sliders stepping outward.
    ///
    /// Successors that leave the mover's own king attacked are filtered
    /// out. An empty result means checkmate or stalemate depending on
    /// whether the king is currently in check.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Board> {
        let mut moves = Vec::with_capacity(MAX_MOVES);
        for (square, piece_color, piece) in self.pieces() {
            if piece_color == color {
                self.piece_moves(square, color, piece, &mut moves);
            }
        }
        moves.retain(|next| !next.in_check(color));
        moves
    }

    /// Append every pseudo-legal successor for one piece to `out`.
    fn piece_moves(&self, from: Square, color: Color, piece: Piece, out: &mut Vec<Board>) {
        for vector in tables::move_vectors(piece, color) {
            let mut steps = vector.steps;
            // Pawn pushes carry a step count of 0: two squares from the
            // starting rank, one square after that.
            if steps == 0 {
                steps = if from.rank() == color.pawn_start_rank() {
                    2
                } else {
                    1
                };
            }
            let mut square = from;
            while steps > 0 {
                steps -= 1;
                let Some(to) = square.offset(vector.dx, vector.dy) else {
                    break;
                };
                square = to;
                let target = self.piece_at(to);
                match target {
                    Some((target_color, _)) if target_color == color => break,
                    Some(_) if vector.capture == CaptureMode::Forbidden => break,
                    None if vector.capture == CaptureMode::Required => break,
                    _ => {}
                }
                if piece == Piece::Pawn && to.rank() == color.promotion_rank() {
                    for promoted in PROMOTION_PIECES {
                        let mut next = self.clone();
                        next.clear_square(from);
                        next.set_piece(to, color, promoted);
                        out.push(next);
                    }
                } else {
                    let mut next = self.clone();
                    next.clear_square(from);
                    next.set_piece(to, color, piece);
                    out.push(next);
                }
                if target.is_some() {
                    // captured, the ray stops here
                    break;
                }
            }
        }
    }
}
