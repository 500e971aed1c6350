//! Manhattan journeys: two straight walks with a single turn.
//!
//! Used for every trip where the robot is *not* yet shepherding an item:
//! reaching a fetch position, returning for the next assignment, and the
//! final parking run.

use pbs_core::layout::COLS;
use pbs_core::{GridPos, Side, SimRng, Step};

use crate::walks::{column_walk, row_walk};

// ── Axis order ────────────────────────────────────────────────────────────────

/// Which axis the journey travels first.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AxisOrder {
    ColumnsFirst,
    RowsFirst,
}

impl AxisOrder {
    /// The standard rule: columns first when the target shares the robot's
    /// row or sits in the top two rows, rows first when it shares the
    /// column, otherwise a coin flip.
    pub fn choose(from: GridPos, target: GridPos, rng: &mut SimRng) -> AxisOrder {
        if target.row == from.row || target.row <= 1 {
            AxisOrder::ColumnsFirst
        } else if target.col == from.col {
            AxisOrder::RowsFirst
        } else {
            AxisOrder::random(rng)
        }
    }

    pub fn random(rng: &mut SimRng) -> AxisOrder {
        if rng.coin() { AxisOrder::ColumnsFirst } else { AxisOrder::RowsFirst }
    }
}

// ── Route kind ────────────────────────────────────────────────────────────────

/// Whether the journey targets an item (and must stop at a fetch position
/// beside it) or an exact cell (parking).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteKind {
    /// Apply the fetch redirects: top-row items are approached from the
    /// left, interior items from one row above.
    ToItem,
    /// No redirects; walk the escort onto the target cell itself.
    Direct,
}

// ── Journeys ──────────────────────────────────────────────────────────────────

/// The two-leg journey from `from` (the robot on its escort) to `target`.
pub fn manhattan_steps(
    from: GridPos,
    target: GridPos,
    order: AxisOrder,
    kind: RouteKind,
) -> Vec<Step> {
    let mut steps = Vec::new();
    match order {
        AxisOrder::ColumnsFirst => {
            let target = match kind {
                RouteKind::ToItem => redirect_top_row(target),
                RouteKind::Direct => target,
            };
            steps.extend(column_walk(from, target.col));
            steps.extend(row_walk(GridPos::new(from.row, target.col), target.row));
        }
        AxisOrder::RowsFirst => {
            let target = match kind {
                // Stop one row above the item so the carry phase can tuck in.
                RouteKind::ToItem if target.row > 1 => GridPos::new(target.row - 1, target.col),
                _ => target,
            };
            steps.extend(row_walk(from, target.row));
            steps.extend(column_walk(GridPos::new(target.row, from.col), target.col));
        }
    }
    steps
}

/// Top-row items cannot be approached from above; aim one column to the
/// left instead (right for the left corner).
fn redirect_top_row(target: GridPos) -> GridPos {
    if target.row != 0 {
        return target;
    }
    let col = match target.col {
        0 => 1,
        c if c == COLS - 1 => COLS - 2,
        c => c - 1,
    };
    GridPos::new(0, col)
}

/// The journey back to the next assignment after an exit: up to the top
/// row, along it to the item's side wall, down to one row above the item,
/// then across to its column.  Hugging the wall keeps the return lane clear
/// of the traffic around the I/O.
pub fn return_route(from_escort: GridPos, item_loc: GridPos) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut loc = from_escort;

    if loc.row > 0 {
        steps.extend(row_walk(loc, 0));
        loc = GridPos::new(0, loc.col);
    }

    let fetch_row = item_loc.row.saturating_sub(1);
    let target_col = match item_loc.col {
        0 => 1,
        c if c == COLS - 1 => COLS - 2,
        c => c,
    };
    let wall = match Side::of_dispatch(item_loc.col) {
        Side::Right | Side::Center => COLS - 1,
        Side::Left => 0,
    };

    steps.extend(column_walk(loc, wall));
    steps.extend(row_walk(GridPos::new(0, wall), fetch_row));
    steps.extend(column_walk(GridPos::new(fetch_row, wall), target_col));
    steps
}
