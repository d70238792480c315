//! Error types for board parsing.

use std::fmt;

use super::types::{Color, Square};

/// Error type for placement-string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Placement string is not exactly 64 characters
    BadLength { found: usize },
    /// Invalid piece character in the placement string
    InvalidPiece { found: char, square: Square },
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::BadLength { found } => {
                write!(f, "Placement must be exactly 64 characters, found {found}")
            }
            ParseBoardError::InvalidPiece { found, square } => {
                write!(f, "Invalid piece character '{found}' at {square}")
            }
            ParseBoardError::MissingKing { color } => {
                write!(f, "{color} has no king")
            }
            ParseBoardError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

/// Error type for square notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError {
    /// The notation that failed to parse
    pub notation: String,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid square notation '{}'", self.notation)
    }
}

impl std::error::Error for ParseSquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_length_message() {
        let err = ParseBoardError::BadLength { found: 63 };
        assert!(err.to_string().contains("63"));
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_invalid_piece_message() {
        let err = ParseBoardError::InvalidPiece {
            found: 'x',
            square: "e4".parse().unwrap(),
        };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_missing_king_message() {
        let err = ParseBoardError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_duplicate_king_message() {
        let err = ParseBoardError::DuplicateKing {
            color: Color::White,
        };
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = ParseBoardError::BadLength { found: 10 };
        let err2 = ParseBoardError::BadLength { found: 10 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_square_error_message() {
        let err = ParseSquareError {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }
}
