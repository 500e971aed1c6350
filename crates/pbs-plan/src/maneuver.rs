//! Compound manoeuvres: the three-step and five-step detours.
//!
//! Once a robot has tucked itself beside the item it is moving, a plain walk
//! would just drag the item backwards again.  The compound manoeuvres walk
//! the escort *around* the item so each cycle nets the item one cell toward
//! the I/O:
//!
//! - a horizontal three-step shifts the escort one column toward the I/O,
//!   one row toward it, and one column back — the item advances one column;
//! - a vertical three-step is the symmetric pattern along rows;
//! - the five-step variants are the wider detours needed on the final
//!   stretch, where the item is between the robot and the I/O.
//!
//! Every manoeuvre starts with a [`PlannedStep::Check`] gate so the
//! scheduler can confirm, at dispatch time, that the tracked item is still
//! adjacent before committing to the sequence.

use pbs_core::layout::IO_CELL;
use pbs_core::{GridPos, PlannedStep, Side, Step};

use crate::walks::{column_walk, row_walk};

fn extend_moves(steps: &mut Vec<PlannedStep>, walk: Vec<Step>) {
    steps.extend(walk.into_iter().map(PlannedStep::Move));
}

/// One column toward the I/O column from `col`.
fn toward_center(col: usize) -> usize {
    if col > IO_CELL.col { col - 1 } else { col + 1 }
}

// ── Three-step ────────────────────────────────────────────────────────────────

/// Advance the carried item one column toward the I/O.
/// The robot ends one row closer to the I/O in its original column.
pub fn three_step_horizontal(loc: GridPos) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = vec![PlannedStep::Check];
    if loc.col == IO_CELL.col {
        return (loc, steps);
    }
    debug_assert!(loc.row > 0);

    let aside = toward_center(loc.col);
    extend_moves(&mut steps, column_walk(loc, aside));
    extend_moves(&mut steps, row_walk(GridPos::new(loc.row, aside), loc.row - 1));
    extend_moves(&mut steps, column_walk(GridPos::new(loc.row - 1, aside), loc.col));

    (GridPos::new(loc.row - 1, loc.col), steps)
}

/// Advance the carried item one row toward the I/O.
/// The robot ends in its original row, one column toward the I/O.
/// Entered on the top row, the pattern degenerates to the single
/// compensating detour that clears the I/O row.
pub fn three_step_vertical(loc: GridPos) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = vec![PlannedStep::Check];
    if loc.col == IO_CELL.col {
        return (loc, steps);
    }
    let aside = toward_center(loc.col);

    if loc.row == 0 {
        extend_moves(&mut steps, row_walk(loc, 1));
        extend_moves(&mut steps, column_walk(GridPos::new(1, loc.col), aside));
        extend_moves(&mut steps, row_walk(GridPos::new(1, aside), 0));
        return (GridPos::new(0, aside), steps);
    }

    extend_moves(&mut steps, row_walk(loc, loc.row - 1));
    extend_moves(&mut steps, column_walk(GridPos::new(loc.row - 1, loc.col), aside));
    extend_moves(&mut steps, row_walk(GridPos::new(loc.row - 1, aside), loc.row));

    (GridPos::new(loc.row, aside), steps)
}

/// The full carry route from a fetch position: alternate horizontal and
/// vertical three-steps until the robot reaches the I/O column or the top
/// row.  `nudge_down` runs the initial one-row advance that tucks the robot
/// beneath its item (skipped when the robot entered from the bottom row).
pub fn three_step_route(start: GridPos, nudge_down: bool) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = Vec::new();
    let mut loc = start;
    let mut first = true;

    while loc.col != IO_CELL.col && loc.row > 0 {
        if first && nudge_down && loc.row < pbs_core::layout::ROWS - 1 {
            steps.push(PlannedStep::Check);
            let walk = row_walk(loc, loc.row + 1);
            loc = walk.last().map_or(loc, |s| s.to);
            extend_moves(&mut steps, walk);
            first = false;
        }

        let (next, horizontal) = three_step_horizontal(loc);
        loc = next;
        steps.extend(horizontal);

        if loc.row > 0 {
            let (next, vertical) = three_step_vertical(loc);
            loc = next;
            steps.extend(vertical);
        }
    }

    (loc, steps)
}

// ── Five-step ─────────────────────────────────────────────────────────────────

/// Carry the item one column along the top rows: up one row, two columns
/// toward the center, down one row, one column onto the item.
pub fn five_step_horizontal(loc: GridPos) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = vec![PlannedStep::Check];
    debug_assert!(loc.row + 1 < pbs_core::layout::ROWS);

    if loc.col > IO_CELL.col {
        extend_moves(&mut steps, row_walk(loc, loc.row + 1));
        extend_moves(&mut steps, column_walk(GridPos::new(loc.row + 1, loc.col), loc.col - 2));
        extend_moves(&mut steps, row_walk(GridPos::new(loc.row + 1, loc.col - 2), loc.row));
        extend_moves(&mut steps, column_walk(GridPos::new(loc.row, loc.col - 2), loc.col - 1));
        (GridPos::new(loc.row, loc.col - 1), steps)
    } else if loc.col < IO_CELL.col {
        extend_moves(&mut steps, row_walk(loc, loc.row + 1));
        extend_moves(&mut steps, column_walk(GridPos::new(loc.row + 1, loc.col), loc.col + 2));
        extend_moves(&mut steps, row_walk(GridPos::new(loc.row + 1, loc.col + 2), loc.row));
        extend_moves(&mut steps, column_walk(GridPos::new(loc.row, loc.col + 2), loc.col + 1));
        (GridPos::new(loc.row, loc.col + 1), steps)
    } else {
        (loc, steps)
    }
}

/// Carry the item one row down the I/O column: detour one column aside
/// (left for left-side items, right otherwise), two rows toward the I/O,
/// back onto the column, one row onto the item.
pub fn five_step_vertical(loc: GridPos, item_side: Side) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = vec![PlannedStep::Check];
    if loc.row <= 1 {
        return (loc, steps);
    }

    let aside = match item_side {
        Side::Left => loc.col - 1,
        Side::Right | Side::Center => loc.col + 1,
    };
    extend_moves(&mut steps, column_walk(loc, aside));
    extend_moves(&mut steps, row_walk(GridPos::new(loc.row, aside), loc.row - 2));
    extend_moves(&mut steps, column_walk(GridPos::new(loc.row - 2, aside), loc.col));
    extend_moves(&mut steps, row_walk(GridPos::new(loc.row - 2, loc.col), loc.row - 1));

    (GridPos::new(loc.row - 1, loc.col), steps)
}

/// Repeat vertical five-steps until the robot is one row above the I/O.
pub fn five_step_vertical_route(start: GridPos, item_side: Side) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = Vec::new();
    let mut loc = start;
    while loc.row > 1 {
        let (next, s) = five_step_vertical(loc, item_side);
        loc = next;
        steps.extend(s);
    }
    (loc, steps)
}

/// Repeat horizontal five-steps until the robot reaches the I/O fringe
/// (columns 6..=8), with the vertical tail for the off-by-two case.
pub fn five_step_horizontal_route(start: GridPos, item_side: Side) -> (GridPos, Vec<PlannedStep>) {
    let mut steps = Vec::new();
    let mut loc = start;
    while !(6..=8).contains(&loc.col) {
        let (next, s) = five_step_horizontal(loc);
        loc = next;
        steps.extend(s);
    }
    if loc == GridPos::new(2, IO_CELL.col) {
        extend_moves(&mut steps, row_walk(loc, loc.row + 1));
        let (next, s) = five_step_vertical(loc, item_side);
        loc = next;
        steps.extend(s);
    }
    (loc, steps)
}
