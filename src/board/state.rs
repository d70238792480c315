//! Board state representation.

use super::types::{Color, Piece, Square};

/// A chess position stored as a 64-cell mailbox grid.
///
/// Cell 0 is the top-left corner of the printed board (a8); cells run
/// row-major down to h1 at index 63, so Black's army occupies the low
/// indices of the starting position. Boards are plain values: every move
/// produces an independent clone of its parent, and two boards compare
/// equal exactly when every cell matches.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// Create a board with the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut cells = [None; 64];
        for (file, piece) in back_rank.into_iter().enumerate() {
            cells[file] = Some((Color::Black, piece));
            cells[8 + file] = Some((Color::Black, Piece::Pawn));
            cells[48 + file] = Some((Color::White, Piece::Pawn));
            cells[56 + file] = Some((Color::White, piece));
        }
        Board { cells }
    }

    /// Create a board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Get the piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.cells[square.index()]
    }

    /// Place a piece on a square, replacing whatever was there.
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.cells[square.index()] = Some((color, piece));
    }

    /// Remove the piece from a square, if any.
    pub fn clear_square(&mut self, square: Square) {
        self.cells[square.index()] = None;
    }

    /// Find the king of the given color.
    ///
    /// Returns `None` when that side has no king, which the parser rejects
    /// but hand-built positions may produce.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.cells
            .iter()
            .position(|cell| *cell == Some((color, Piece::King)))
            .map(|index| Square::from_index(index as u8))
    }

    /// Iterate over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            cell.map(|(color, piece)| (Square::from_index(index as u8), color, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
