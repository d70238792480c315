//! Chess board representation and game logic.
//!
//! The board is a 64-cell mailbox grid of plain `(Color, Piece)` values
//! and every move is a whole successor board, so positions behave like
//! values throughout the engine. Castling and en passant are deliberately
//! absent from the movement rules.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod eval;
mod movegen;
mod parse;
mod pst;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{ParseBoardError, ParseSquareError};
pub use parse::START_POSITION;
pub use state::Board;
pub use types::{Color, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    best_move, best_move_with_history, SearchConfig, SearchInfoCallback, SearchIterationInfo,
    DEFAULT_MAX_DEPTH, DEFAULT_MOVE_TIME,
};
