//! Self-play game driver.
//!
//! Drives complete games by alternating [`best_move_with_history`] calls
//! between the two colors, keeping the move history the search and the
//! repetition rule both read. The driver owns everything the core search
//! does not: turn alternation, terminal-state naming, and the draw rule.

mod display;

pub use display::render;

use std::fmt;

use crate::board::{best_move_with_history, Board, Color, SearchConfig};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move had no legal reply while in check.
    Checkmate { winner: Color },
    /// The side to move had no legal reply with its king safe.
    Stalemate,
    /// The same position occurred three times.
    DrawByRepetition,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "Stalemate"),
            GameOutcome::DrawByRepetition => write!(f, "Draw by repetition"),
        }
    }
}

/// Play a game out from `board` with White to move first.
///
/// After each move the observer receives the move number (counting from
/// 1), the side that moved, and the resulting position. The game ends
/// when a side has no legal reply (checkmate or stalemate, told apart by
/// [`Board::in_check`]) or when the position just reached has now
/// occurred three times.
pub fn play<F>(board: Board, config: &SearchConfig, mut on_move: F) -> GameOutcome
where
    F: FnMut(u32, Color, &Board),
{
    let mut board = board;
    let mut color = Color::White;
    let mut history: Vec<Board> = Vec::new();
    let mut move_number = 0u32;
    loop {
        let Some(next) = best_move_with_history(&board, color, &history, config) else {
            return if board.in_check(color) {
                GameOutcome::Checkmate {
                    winner: color.opponent(),
                }
            } else {
                GameOutcome::Stalemate
            };
        };
        move_number += 1;
        on_move(move_number, color, &next);
        history.push(next.clone());
        if history.iter().filter(|past| **past == next).count() >= 3 {
            return GameOutcome::DrawByRepetition;
        }
        board = next;
        color = color.opponent();
    }
}
