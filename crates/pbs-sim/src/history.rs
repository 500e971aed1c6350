//! Per-robot move history.
//!
//! Append-only: one entry per robot per movement tick.  Robots that stand
//! still log a fictitious `(loc, loc, false)` move, so the five histories
//! stay aligned tick-for-tick and the whole log replays deterministically
//! against the initial grid.

use pbs_core::layout::ROBOT_COUNT;
use pbs_core::{GridPos, RobotId, Step};

/// The chronological move record for all five robots.
#[derive(Debug, Default)]
pub struct MoveLog {
    moves: [Vec<Step>; ROBOT_COUNT],
}

impl MoveLog {
    pub fn record(&mut self, robot: RobotId, step: Step) {
        self.moves[robot.index()].push(step);
    }

    pub fn record_fictitious(&mut self, robot: RobotId, at: GridPos) {
        self.moves[robot.index()].push(Step::fictitious(at));
    }

    /// One robot's history in tick order.
    pub fn robot(&self, robot: RobotId) -> &[Step] {
        &self.moves[robot.index()]
    }

    /// All five histories, indexed by `RobotId`.
    pub fn all(&self) -> &[Vec<Step>; ROBOT_COUNT] {
        &self.moves
    }
}
