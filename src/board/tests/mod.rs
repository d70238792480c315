//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation
//! - `attacks.rs` - Check detection
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Best-move selection and time management
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::Board;

/// Build a board from eight 8-character rows, top rank first.
fn make_board(rows: [&str; 8]) -> Board {
    rows.concat().parse().expect("valid placement")
}
