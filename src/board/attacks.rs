//! Check detection.
//!
//! Rather than generating the opponent's moves, the king's square is
//! scanned outward along every direction an attack can arrive from. The
//! first piece met on each ray either gives check (it is an enemy piece of
//! a type that attacks along that ray) or blocks the ray for good.

use super::state::Board;
use super::tables::{self, ScanVector};
use super::types::{Color, Piece, Square};

impl Board {
    /// Test whether the king of the given color is attacked.
    ///
    /// A board with no king for that color is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let enemy = color.opponent();
        for test in tables::check_tests(color) {
            for &vector in test.vectors {
                if let Some((found_color, found_piece)) = self.first_piece_along(king, vector) {
                    if found_color == enemy && test.threats.contains(&found_piece) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// First piece met walking from `from` along `vector`, if any.
    fn first_piece_along(&self, from: Square, vector: ScanVector) -> Option<(Color, Piece)> {
        let mut square = from;
        let mut steps = vector.steps;
        while steps > 0 {
            steps -= 1;
            square = square.offset(vector.dx, vector.dy)?;
            if let Some(found) = self.piece_at(square) {
                return Some(found);
            }
        }
        None
    }
}
