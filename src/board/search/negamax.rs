//! Negamax recursion and the iterative-deepening root loop.

use std::time::Instant;

use super::{SearchConfig, SearchIterationInfo, DRAW_SCORE, SCORE_INFINITY};
use crate::board::movegen::MAX_MOVES;
use crate::board::pst::MATE_VALUE;
use crate::board::state::Board;
use crate::board::types::{Color, Piece};

/// A root candidate: the successor board, the one-ply static score it is
/// ordered by, and the repetition penalty applied to its deepened scores.
struct ScoredBoard {
    score: i32,
    penalty: i32,
    board: Board,
}

/// Per-search state threaded through the recursion.
///
/// The clock lives here rather than in a process global: it is written
/// once when the search starts and only read afterwards.
pub(super) struct SearchContext<'a> {
    config: &'a SearchConfig,
    start_time: Instant,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(config: &'a SearchConfig) -> Self {
        let start_time = Instant::now();
        SearchContext {
            config,
            start_time,
            deadline: config.move_time.map(|budget| start_time + budget),
            nodes: 0,
        }
    }

    /// True once the wall-clock budget is spent.
    fn timed_out(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// Negamax with alpha-beta pruning, scoring `board` for `color` with
    /// `depth` plies of look-ahead.
    ///
    /// An expired clock stops the sibling loop early and returns the
    /// running alpha. That truncated value can only arrive at the root
    /// after the deadline, where it is discarded, so it never decides a
    /// move.
    fn negamax(
        &mut self,
        board: &Board,
        color: Color,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return board.evaluate(color);
        }
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            // Remaining depth biases the mate sentinel so nearer mates
            // score as more extreme.
            return if board.in_check(color) {
                -(MATE_VALUE + depth as i32)
            } else {
                DRAW_SCORE
            };
        }
        for next in &moves {
            if self.timed_out() {
                break;
            }
            let value = -self.negamax(next, color.opponent(), -beta, -alpha, depth - 1);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        alpha
    }

    /// Iterative-deepening root loop.
    pub(super) fn run(mut self, board: &Board, color: Color, history: &[Board]) -> Option<Board> {
        let mut candidates: Vec<ScoredBoard> = Vec::with_capacity(MAX_MOVES);
        for next in board.legal_moves(color) {
            let repetitions = history.iter().filter(|past| **past == next).count() as i32;
            candidates.push(ScoredBoard {
                score: next.evaluate(color),
                penalty: repetitions * Piece::Queen.value(),
                board: next,
            });
        }
        if candidates.is_empty() {
            return None;
        }
        // sort_by is stable: equal scores keep generation order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        // The top static candidate stands in until a depth completes, so
        // an already-elapsed budget still answers with a legal move.
        let mut best = candidates[0].board.clone();
        'deepening: for depth in 1..=self.config.max_depth {
            let mut depth_best: Option<&Board> = None;
            let mut depth_score = -SCORE_INFINITY;
            let mut alpha = -SCORE_INFINITY;
            let beta = SCORE_INFINITY;
            for candidate in &candidates {
                let value =
                    -self.negamax(&candidate.board, color.opponent(), -beta, -alpha, depth - 1)
                        - candidate.penalty;
                if self.timed_out() {
                    // A value settled after the deadline may come from a
                    // truncated subtree, keep the last completed depth.
                    break 'deepening;
                }
                if value > depth_score {
                    depth_score = value;
                    depth_best = Some(&candidate.board);
                }
                alpha = alpha.max(value);
            }
            if let Some(found) = depth_best {
                best = found.clone();
            }
            self.report(depth, depth_score);
        }
        Some(best)
    }

    /// Emit info for a completed depth.
    fn report(&self, depth: u32, score: i32) {
        #[cfg(feature = "logging")]
        log::debug!("depth {depth} score {score} nodes {}", self.nodes);
        if let Some(callback) = &self.config.info_callback {
            let time_ms = self.start_time.elapsed().as_millis() as u64;
            let nps = if time_ms > 0 {
                self.nodes * 1000 / time_ms
            } else {
                0
            };
            callback(&SearchIterationInfo {
                depth,
                score,
                nodes: self.nodes,
                time_ms,
                nps,
            });
        }
    }
}
