//! Static board evaluation.

use super::pst;
use super::state::Board;
use super::types::Color;

impl Board {
    /// Static score of the position from `color`'s point of view.
    ///
    /// Each side's material values and piece-square bonuses are summed
    /// separately. The result is the White total minus the Black total,
    /// negated when scoring for Black, so a positive score always means
    /// the given side stands better.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> i32 {
        let mut white = 0;
        let mut black = 0;
        for (square, piece_color, piece) in self.pieces() {
            let score = piece.value() + pst::positional(piece_color, piece, square);
            match piece_color {
                Color::White => white += score,
                Color::Black => black += score,
            }
        }
        (white - black) * color.sign()
    }
}
