//! Escape routes around a blocking robot.
//!
//! When a robot's next step would land on another robot, it dodges one cell
//! perpendicular to the conflict axis, holds still for the freeze duration,
//! and walks back — by which time the blocker has normally passed through.

use pbs_core::layout::{COLS, FREEZE_TICKS, ROWS};
use pbs_core::{GridPos, SimRng, Step};

use crate::walks::{column_walk, row_walk};

/// Build the dodge plan for `robot` yielding to a conflict at `blocker`.
///
/// Conflicts that share neither axis produce no plan; the caller falls back
/// to a plain freeze.
pub fn dodge_steps(robot: GridPos, blocker: GridPos, rng: &mut SimRng) -> Vec<Step> {
    let mut steps = Vec::new();

    if robot.col == blocker.col {
        // Vertical conflict: sidestep one column.
        let aside = sidestep(robot.col, COLS, rng);
        let refuge = GridPos::new(robot.row, aside);
        steps.extend(column_walk(robot, aside));
        steps.extend((0..FREEZE_TICKS).map(|_| Step::fictitious(refuge)));
        steps.extend(column_walk(refuge, robot.col));
    } else if robot.row == blocker.row {
        // Horizontal conflict: sidestep one row.
        let aside = sidestep(robot.row, ROWS, rng);
        let refuge = GridPos::new(aside, robot.col);
        steps.extend(row_walk(robot, aside));
        steps.extend((0..FREEZE_TICKS).map(|_| Step::fictitious(refuge)));
        steps.extend(row_walk(refuge, robot.row));
    }

    steps
}

/// One coordinate aside, bounded by the grid edge; a coin flip when both
/// directions are open.
fn sidestep(coord: usize, len: usize, rng: &mut SimRng) -> usize {
    if coord == 0 {
        1
    } else if coord == len - 1 {
        coord - 1
    } else if rng.coin() {
        coord + 1
    } else {
        coord - 1
    }
}
