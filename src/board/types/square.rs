//! Board square representation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ParseSquareError;

/// A square on the board, stored as an index into the 64-cell grid.
///
/// Index 0 is the top-left corner of the printed board (a8, Black's back
/// rank); index 63 is the bottom-right (h1). For an index `i`, the file is
/// `i % 8` and the rank is `i / 8`, so ranks count downward from Black's
/// side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a rank and file, both 0-7.
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Rank of this square (0 = top of the board, Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// File of this square (0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Index into the 64-cell grid (0-63, row-major from the top rank)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a file and rank delta, returning `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let file = self.file() as i8 + dx;
        let rank = self.rank() as i8 + dy;
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, 8 - self.rank())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError {
                notation: s.to_string(),
            });
        };

        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => {
                return Err(ParseSquareError {
                    notation: s.to_string(),
                })
            }
        };
        let rank = match rank_char {
            '1'..='8' => 8 - (rank_char as u8 - b'0'),
            _ => {
                return Err(ParseSquareError {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(rank * 8 + file))
    }
}
