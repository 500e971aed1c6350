//! Board invariants re-checked after every tick commit.
//!
//! The grid is tiny, so a full scan per tick costs nothing and turns state
//! corruption into an immediate, diagnosable failure instead of a silently
//! wrong plan.

use pbs_core::layout::ROBOT_COUNT;
use pbs_core::{GridPos, PbsError, PbsResult, RobotId};

use crate::warehouse::Warehouse;

impl Warehouse {
    pub(crate) fn check_invariants(&self) -> PbsResult<()> {
        self.check_robot_occupancy()?;
        self.check_escorts()?;
        self.check_pending_items()
    }

    fn violation(&self, detail: String) -> PbsError {
        PbsError::InvariantViolation { tick: self.clock, detail }
    }

    /// Every robot occupies exactly one cell.
    fn check_robot_occupancy(&self) -> PbsResult<()> {
        let mut cells: [Option<GridPos>; ROBOT_COUNT] = [None; ROBOT_COUNT];
        for pos in self.grid.positions() {
            if let Some(id) = self.grid.robot_at(pos) {
                if let Some(earlier) = cells[id.index()] {
                    return Err(self.violation(format!("{id} occupies both {earlier} and {pos}")));
                }
                cells[id.index()] = Some(pos);
            }
        }
        for id in RobotId::all() {
            if cells[id.index()].is_none() {
                return Err(self.violation(format!("{id} is not on the board")));
            }
        }
        Ok(())
    }

    /// Exactly one escort per robot, sitting under it or orthogonally
    /// adjacent.  Escorts are conserved: the slide mechanics only ever swap
    /// them with items.
    fn check_escorts(&self) -> PbsResult<()> {
        let mut escorts: [Option<GridPos>; ROBOT_COUNT] = [None; ROBOT_COUNT];
        for pos in self.grid.positions() {
            if let Some(owner) = self.grid.escort_owner(pos) {
                if let Some(earlier) = escorts[owner.index()] {
                    return Err(self.violation(format!(
                        "{owner} has escorts at both {earlier} and {pos}"
                    )));
                }
                escorts[owner.index()] = Some(pos);
            }
        }
        for id in RobotId::all() {
            let Some(escort) = escorts[id.index()] else {
                return Err(self.violation(format!("{id} has no escort on the board")));
            };
            let robot = self.positions[id.index()];
            let gap = robot.row.abs_diff(escort.row) + robot.col.abs_diff(escort.col);
            // normally 0 or 1; an in-flight dodge parts the pair by one more
            if gap > 2 {
                return Err(self.violation(format!(
                    "{id} at {robot} strayed from its escort at {escort}"
                )));
            }
        }
        Ok(())
    }

    /// Every pending exit still corresponds to a live, flagged item.
    fn check_pending_items(&self) -> PbsResult<()> {
        for number in self.ledger.pending_items() {
            let pos = self.grid.find_item(number).map_err(|_| {
                self.violation(format!("pending {number} is missing from the board"))
            })?;
            let flagged = self.grid.item_at(pos).is_some_and(|item| item.to_exit);
            if !flagged {
                return Err(self.violation(format!("pending {number} at {pos} lost its flag")));
            }
        }
        Ok(())
    }
}
