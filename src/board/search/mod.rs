//! Search module implementing negamax alpha-beta with iterative deepening.
//!
//! The search works on whole boards: every node enumerates its legal
//! successor boards and recurses into them, so there is nothing to make
//! or unmake. Root candidates are sorted once by static evaluation to
//! front-load likely cutoffs, then re-scored at increasing depth until
//! the ply limit or the wall-clock budget is reached.

mod negamax;

use std::sync::Arc;
use std::time::Duration;

use negamax::SearchContext;

use super::pst::MATE_VALUE;
use super::state::Board;
use super::types::Color;

/// Depth limit in plies when the caller does not set one
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Wall-clock budget per move when the caller does not set one
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(10);

/// Window bound beyond every reachable score, mate sentinels included
pub(crate) const SCORE_INFINITY: i32 = MATE_VALUE * 10;

/// Neutral score for stalemate
pub(crate) const DRAW_SCORE: i32 = 0;

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig {
    /// Maximum depth to search, in plies
    pub max_depth: u32,
    /// Wall-clock budget per move (`None` = unlimited)
    pub move_time: Option<Duration>,
    /// Optional callback invoked after each completed depth
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            move_time: Some(DEFAULT_MOVE_TIME),
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited config with no time limit
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            move_time: None,
            ..Default::default()
        }
    }

    /// Create a time-limited config at the default depth cap
    #[must_use]
    pub fn time(move_time: Duration) -> Self {
        SearchConfig {
            move_time: Some(move_time),
            ..Default::default()
        }
    }

    /// Attach a callback for per-depth info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    /// Depth just completed, in plies
    pub depth: u32,
    /// Best score found at this depth, from the searching side's view
    pub score: i32,
    /// Nodes visited since the search began
    pub nodes: u64,
    /// Elapsed wall-clock time since the search began
    pub time_ms: u64,
    /// Nodes per second
    pub nps: u64,
}

/// Callback type for per-depth info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Find the best reply for `color` on `board`.
///
/// Returns `None` only when `color` has no legal move; the caller tells
/// checkmate from stalemate with [`Board::in_check`]. An elapsed or zero
/// time budget still answers with the candidate ranked best by static
/// evaluation.
#[must_use]
pub fn best_move(board: &Board, color: Color, config: &SearchConfig) -> Option<Board> {
    best_move_with_history(board, color, &[], config)
}

/// Find the best reply, discouraging repeats of positions in `history`.
///
/// A root candidate equal to a past position is charged a queen per
/// occurrence when deepened scores are compared, steering the engine away
/// from repetition draws while it stands better. The penalty never
/// affects the initial static ordering.
#[must_use]
pub fn best_move_with_history(
    board: &Board,
    color: Color,
    history: &[Board],
    config: &SearchConfig,
) -> Option<Board> {
    SearchContext::new(config).run(board, color, history)
}
