//! Placement-string parsing and formatting.
//!
//! A position is encoded as exactly 64 characters, row-major from the top
//! rank down: uppercase letters for White pieces, lowercase for Black,
//! and a space for an empty square.

use std::fmt;
use std::str::FromStr;

use super::error::ParseBoardError;
use super::types::{Color, Piece, Square};
use super::Board;

/// Placement string for the standard starting position.
pub const START_POSITION: &str =
    "rnbqkbnrpppppppp                                PPPPPPPPRNBQKBNR";

impl Board {
    /// Parse a board from a 64-character placement string.
    ///
    /// Validation is strict: the string must be exactly 64 characters,
    /// every non-space character must name a piece, and each side must
    /// have exactly one king.
    pub fn try_from_placement(placement: &str) -> Result<Self, ParseBoardError> {
        let len = placement.chars().count();
        if len != 64 {
            return Err(ParseBoardError::BadLength { found: len });
        }

        let mut board = Board::empty();
        let mut white_kings = 0u32;
        let mut black_kings = 0u32;
        for (index, c) in placement.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let square = Square::from_index(index as u8);
            let piece = Piece::from_char(c).ok_or(ParseBoardError::InvalidPiece {
                found: c,
                square,
            })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if piece == Piece::King {
                match color {
                    Color::White => white_kings += 1,
                    Color::Black => black_kings += 1,
                }
            }
            board.set_piece(square, color, piece);
        }

        for color in Color::BOTH {
            let kings = match color {
                Color::White => white_kings,
                Color::Black => black_kings,
            };
            if kings == 0 {
                return Err(ParseBoardError::MissingKing { color });
            }
            if kings > 1 {
                return Err(ParseBoardError::DuplicateKing { color });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                Some((color, piece)) => piece.to_placement_char(*color),
                None => ' ',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Board::try_from_placement(&s).map_err(serde::de::Error::custom)
    }
}
