//! One-axis slide-puzzle walks — the movement primitive everything else is
//! built from.
//!
//! A robot travels with its escort (the one empty cell bound to it).  To
//! advance one cell the robot must first push the escort ahead, step into
//! the gap, and let the trailing slot close behind it.  Concretely, for a
//! walk of N cells along one axis:
//!
//! - first advance: 2 sub-steps — step onto the next cell, then pull back
//!   onto the escort dragging the payload forward (`carries = true` on the
//!   exchange);
//! - each further advance: 3 sub-steps — reposition onto the escort,
//!   overshoot one cell, pull back;
//! - final settle onto the target cell: 1 sub-step, no pull-back.
//!
//! Total: 3N sub-steps.  A zero-length walk produces no steps.  The
//! direction is inferred from the sign of (target − current); callers are
//! responsible for staying inside the grid.

use std::cmp::Ordering;

use pbs_core::{GridPos, Step};

/// Walk along a column from `from` to `(target_row, from.col)`.
pub fn row_walk(from: GridPos, target_row: usize) -> Vec<Step> {
    let col = from.col;
    let at = |row: usize| GridPos::new(row, col);
    let mut steps = Vec::new();

    match target_row.cmp(&from.row) {
        Ordering::Greater => {
            for (i, row) in (from.row..target_row).enumerate() {
                if i == 0 {
                    steps.push(Step::new(at(row), at(row + 1), false));
                    steps.push(Step::new(at(row + 1), at(row), true));
                } else {
                    steps.push(Step::new(at(row - 1), at(row), false));
                    steps.push(Step::new(at(row), at(row + 1), false));
                    steps.push(Step::new(at(row + 1), at(row), true));
                }
            }
            steps.push(Step::new(at(target_row - 1), at(target_row), false));
        }
        Ordering::Less => {
            for (i, row) in (target_row + 1..=from.row).rev().enumerate() {
                if i == 0 {
                    steps.push(Step::new(at(row), at(row - 1), false));
                    steps.push(Step::new(at(row - 1), at(row), true));
                } else {
                    steps.push(Step::new(at(row + 1), at(row), false));
                    steps.push(Step::new(at(row), at(row - 1), false));
                    steps.push(Step::new(at(row - 1), at(row), true));
                }
            }
            steps.push(Step::new(at(target_row + 1), at(target_row), false));
        }
        Ordering::Equal => {}
    }

    steps
}

/// Walk along a row from `from` to `(from.row, target_col)`.
pub fn column_walk(from: GridPos, target_col: usize) -> Vec<Step> {
    let row = from.row;
    let at = |col: usize| GridPos::new(row, col);
    let mut steps = Vec::new();

    match target_col.cmp(&from.col) {
        Ordering::Greater => {
            for (i, col) in (from.col..target_col).enumerate() {
                if i == 0 {
                    steps.push(Step::new(at(col), at(col + 1), false));
                    steps.push(Step::new(at(col + 1), at(col), true));
                } else {
                    steps.push(Step::new(at(col - 1), at(col), false));
                    steps.push(Step::new(at(col), at(col + 1), false));
                    steps.push(Step::new(at(col + 1), at(col), true));
                }
            }
            steps.push(Step::new(at(target_col - 1), at(target_col), false));
        }
        Ordering::Less => {
            for (i, col) in (target_col + 1..=from.col).rev().enumerate() {
                if i == 0 {
                    steps.push(Step::new(at(col), at(col - 1), false));
                    steps.push(Step::new(at(col - 1), at(col), true));
                } else {
                    steps.push(Step::new(at(col + 1), at(col), false));
                    steps.push(Step::new(at(col), at(col - 1), false));
                    steps.push(Step::new(at(col - 1), at(col), true));
                }
            }
            steps.push(Step::new(at(target_col + 1), at(target_col), false));
        }
        Ordering::Equal => {}
    }

    steps
}
