//! Terminal rendering of a position.

use crate::board::{Board, Color, Piece, Square};

/// Unicode figurine for a piece of the given color.
const fn glyph(color: Color, piece: Piece) -> char {
    match (color, piece) {
        (Color::White, Piece::Pawn) => '♙',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::King) => '♔',
        (Color::Black, Piece::Pawn) => '♟',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::King) => '♚',
    }
}

/// Render a board as a box-drawing diagram with Unicode pieces, file
/// letters across the top, and rank numbers down the right edge.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  a   b   c   d   e   f   g   h\n");
    out.push_str("┏━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┓\n");
    for rank in 0..8u8 {
        for file in 0..8u8 {
            let square = Square::from_index(rank * 8 + file);
            out.push_str("┃ ");
            match board.piece_at(square) {
                Some((color, piece)) => out.push(glyph(color, piece)),
                None => out.push(' '),
            }
            out.push(' ');
        }
        out.push_str("┃ ");
        out.push((b'8' - rank) as char);
        out.push('\n');
        if rank != 7 {
            out.push_str("┣━━━╋━━━╋━━━╋━━━╋━━━╋━━━╋━━━╋━━━┫\n");
        }
    }
    out.push_str("┗━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┛\n");
    out
}
