pub mod board;
pub mod game;

pub use board::{best_move, best_move_with_history, Board, Color, Piece, SearchConfig, Square};
pub use game::{play, render, GameOutcome};
