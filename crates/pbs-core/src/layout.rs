//! Frozen warehouse geometry.
//!
//! These constants describe the physical installation and are not
//! configurable at run time: 9×15 cells, one I/O cell in the middle of the
//! top row, five robots whose escorts alternate left/right, and two small
//! zones around the I/O where traffic is arbitrated.

use crate::pos::GridPos;
use crate::side::Side;

pub const ROWS: usize = 9;
pub const COLS: usize = 15;

/// The single exit cell.  Items leave the warehouse here.
pub const IO_CELL: GridPos = GridPos::new(0, 7);

pub const ROBOT_COUNT: usize = 5;

/// Robot side assignment in escort scan order (row-major over the snapshot).
pub const ROBOT_SIDE_PATTERN: [Side; ROBOT_COUNT] =
    [Side::Left, Side::Right, Side::Left, Side::Right, Side::Left];

/// Terminal cells for retiring robots, popped front-to-back per side.  The
/// duplicate right-hand entry is padding: only two robots are assigned to the
/// right, so the third entry is never used.
pub const PARKING_LEFT: [GridPos; 3] =
    [GridPos::new(7, 0), GridPos::new(3, 0), GridPos::new(0, 4)];
pub const PARKING_RIGHT: [GridPos; 3] =
    [GridPos::new(8, 14), GridPos::new(0, 14), GridPos::new(0, 14)];

/// How many ticks a robot holds still when it yields to a conflict.
pub const FREEZE_TICKS: usize = 3;

/// Seed of the single random stream; fixed so runs are bit-reproducible.
pub const DEFAULT_SEED: u64 = 666;

/// Only the winning carrier may enter this rectangle around the I/O.
pub fn in_restricted_zone(p: GridPos) -> bool {
    p.row <= 3 && (5..=8).contains(&p.col)
}

/// Carriers inside this larger rectangle take part in the arbitration that
/// decides who may enter the restricted zone.
pub fn in_arbitration_zone(p: GridPos) -> bool {
    p.row <= 5 && (4..=10).contains(&p.col)
}

/// Default cap on total simulation ticks: 10 × items × grid perimeter.
/// Hitting the cap with items still pending is a no-progress failure.
pub fn default_tick_cap(item_count: usize) -> u64 {
    (10 * item_count.max(1) * 2 * (ROWS + COLS)) as u64
}
