//! Stateful planner orchestration.
//!
//! The pure generators in `pbs-plan` know how a robot+escort pair moves;
//! this module decides *which* route to build, reading the live grid and
//! updating tasks, claims, and queues.  Re-planning is always allowed to
//! fail soft: a robot that cannot plan this tick stands still and tries
//! again on the next one.

use pbs_core::layout::{IO_CELL, ROWS};
use pbs_core::{GridPos, ItemNumber, PbsError, PbsResult, PlannedStep, RobotId, Side, Step};
use pbs_grid::Task;
use pbs_plan::{
    column_walk, dodge_steps, five_step_horizontal_route, five_step_vertical_route,
    manhattan_steps, return_route, row_walk, three_step_route, AxisOrder, RouteKind,
};

use crate::warehouse::Warehouse;

fn as_moves(steps: Vec<Step>) -> impl Iterator<Item = PlannedStep> {
    steps.into_iter().map(PlannedStep::Move)
}

impl Warehouse {
    // ── Assignment and the Manhattan journey ──────────────────────────────

    /// Claim `item` for `robot` and plan the journey to its fetch position.
    pub(crate) fn assign_and_route(&mut self, id: RobotId, item: ItemNumber) -> PbsResult<()> {
        self.ledger.claim(item, id);
        self.robots[id.index()].task = Task::Fetch(item);
        self.route_to_item(id, item, false)
    }

    /// Plan the Manhattan journey toward `item`.
    ///
    /// An empty route means the robot is already at the fetch position; it
    /// then enters the carry phase directly — unless this call *is* a
    /// re-route, in which case the robot waits a tick instead of risking a
    /// replan cycle within the same tick.
    pub(crate) fn route_to_item(
        &mut self,
        id: RobotId,
        item: ItemNumber,
        from_reroute: bool,
    ) -> PbsResult<()> {
        let i = id.index();
        let mut loc = self.pos(id);

        let mut steps: Vec<PlannedStep> = Vec::new();
        if let Some(escort) = self.grid.escort_neighbour(loc, id) {
            steps.push(PlannedStep::movement(loc, escort, false));
            loc = escort;
        }

        let Some(target) = self.locate_tracked(id, item)? else {
            return Ok(());
        };
        let order = AxisOrder::choose(loc, target, &mut self.rng);
        steps.extend(as_moves(manhattan_steps(loc, target, order, RouteKind::ToItem)));

        if steps.is_empty() {
            if from_reroute {
                self.robots[i].queue.clear();
                return Ok(());
            }
            return self.begin_carry(id);
        }
        self.robots[i].set_route(steps);
        Ok(())
    }

    // ── Three-step entry ──────────────────────────────────────────────────

    /// The robot reached its fetch position: verify the item is at hand,
    /// switch to carrying, and queue the three-step route toward the I/O.
    pub(crate) fn begin_carry(&mut self, id: RobotId) -> PbsResult<()> {
        let i = id.index();
        let loc = self.pos(id);
        let Some(item) = self.robots[i].tracked_item() else {
            return Ok(());
        };

        let item_at_hand = std::iter::once(loc)
            .chain(loc.neighbours())
            .any(|p| self.grid.item_number_at(p) == Some(item));
        if !item_at_hand {
            log::debug!("{id}: {item} is not beside {loc}, rerouting");
            return self.reroute(id);
        }

        let mut steps: Vec<PlannedStep> = Vec::new();
        let mut start = loc;
        if let Some(escort) = self.grid.escort_neighbour(loc, id) {
            steps.push(PlannedStep::movement(loc, escort, false));
            start = escort;
        }

        let nudge_down = loc.row < ROWS - 1;
        let (_, route) = three_step_route(start, nudge_down);
        steps.extend(route);

        self.robots[i].task = Task::Carry(item);
        if steps.is_empty() {
            // already on the I/O column or top row
            return self.plan_five_step(id);
        }
        self.robots[i].set_route(steps);
        Ok(())
    }

    // ── Five-step entry ───────────────────────────────────────────────────

    /// Plan the final stretch into the I/O cell.
    pub(crate) fn plan_five_step(&mut self, id: RobotId) -> PbsResult<()> {
        let i = id.index();
        let loc = self.pos(id);
        let Some(item) = self.robots[i].tracked_item() else {
            return Ok(());
        };

        if loc == IO_CELL {
            return self.commit_from_io(id, item);
        }

        if loc.col == IO_CELL.col {
            return self.five_step_on_column(id, item, loc);
        }
        if loc.row <= 1 {
            return self.five_step_on_top(id, item, loc);
        }

        // mid-grid with nothing queued: the carry plan broke down somewhere
        log::debug!("{id}: carrying {item} stranded at {loc}, rerouting");
        self.reroute(id)
    }

    /// At the I/O cell itself: pull in whichever neighbouring pending item
    /// is ready, claiming it from its previous owner if necessary.
    fn commit_from_io(&mut self, id: RobotId, item: ItemNumber) -> PbsResult<()> {
        let i = id.index();
        let Some(target) = self.around_io() else {
            return Ok(());
        };
        let Some(captured) = self.grid.item_number_at(target) else {
            return Ok(());
        };

        let steps = if target.row == IO_CELL.row {
            column_walk(IO_CELL, target.col)
        } else {
            row_walk(IO_CELL, target.row)
        };
        self.robots[i].set_route(as_moves(steps).collect());

        // abandon the old carry if we still hold its claim
        if item != captured && self.ledger.owner(item) == Some(id) {
            self.ledger.release(item);
        }
        let previous = self.ledger.owner(captured);
        self.ledger.claim(captured, id);
        self.robots[i].task = Task::Carry(captured);

        if let Some(other) = previous {
            if other != id {
                log::debug!("{id} captured {captured} at the I/O fringe; re-dispatching {other}");
                self.new_route(other)?;
            }
        }
        Ok(())
    }

    /// On the I/O column above the exit: vertical five-steps down to row 1.
    fn five_step_on_column(&mut self, id: RobotId, item: ItemNumber, loc: GridPos) -> PbsResult<()> {
        let i = id.index();
        let below = loc.down();
        let above = loc.up();
        let below_item = (below != loc).then(|| self.grid.item_number_at(below)).flatten();
        let above_item = (above != loc).then(|| self.grid.item_number_at(above)).flatten();

        if below_item != Some(item) && above_item != Some(item) {
            return self.reroute(id);
        }

        let mut steps: Vec<PlannedStep> = Vec::new();
        let mut start = loc;
        let side;
        if below_item == Some(item) {
            // item is one row behind: advance it one row and tuck beneath it
            side = self.grid.item_at(below).map_or(Side::Center, |it| it.side);
            steps.push(PlannedStep::Check);
            let walk = row_walk(loc, loc.row + 1);
            start = walk.last().map_or(loc, |s| s.to);
            steps.extend(as_moves(walk));
        } else {
            side = self.grid.item_at(above).map_or(Side::Center, |it| it.side);
        }

        let (_, route) = five_step_vertical_route(start, side);
        steps.extend(route);
        self.robots[i].set_route(steps);
        Ok(())
    }

    /// On the top two rows off-column: horizontal five-steps to the fringe.
    fn five_step_on_top(&mut self, id: RobotId, item: ItemNumber, loc: GridPos) -> PbsResult<()> {
        let i = id.index();
        let left = loc.left();
        let right = loc.right();
        let left_item = (left != loc).then(|| self.grid.item_number_at(left)).flatten();
        let right_item = (right != loc).then(|| self.grid.item_number_at(right)).flatten();

        let Some(item_loc) = self.locate_tracked(id, item)? else {
            return Ok(());
        };
        let item_side = self.grid.item_at(item_loc).map_or(Side::Center, |it| it.side);

        let mut steps: Vec<PlannedStep> = Vec::new();
        let mut start = loc;
        if loc.col > IO_CELL.col && right_item == Some(item) {
            // one column outward onto the item before turning inward
            let walk = column_walk(loc, loc.col + 1);
            start = walk.last().map_or(loc, |s| s.to);
            steps.extend(as_moves(walk));
        } else if loc.col < IO_CELL.col && left_item == Some(item) {
            let walk = column_walk(loc, loc.col - 1);
            start = walk.last().map_or(loc, |s| s.to);
            steps.extend(as_moves(walk));
        } else if left_item != Some(item) && right_item != Some(item) {
            return self.reroute(id);
        }

        let (_, route) = five_step_horizontal_route(start, item_side);
        steps.extend(route);
        self.robots[i].set_route(steps);
        Ok(())
    }

    // ── Re-dispatch ───────────────────────────────────────────────────────

    /// The grid shifted beneath the plan: flip back to fetch mode and build
    /// a fresh Manhattan journey to the tracked item.
    pub(crate) fn reroute(&mut self, id: RobotId) -> PbsResult<()> {
        let i = id.index();
        let Some(item) = self.robots[i].tracked_item() else {
            return Ok(());
        };
        self.robots[i].task = Task::Fetch(item);
        self.route_to_item(id, item, true)
    }

    /// Abandon the current assignment for a uniformly random unclaimed item
    /// on the robot's side.  Returns `false` when the side has no work left.
    pub(crate) fn new_route(&mut self, id: RobotId) -> PbsResult<bool> {
        let i = id.index();
        let side = self.robots[i].side;
        let choices: Vec<ItemNumber> = self
            .distances
            .side(side)
            .iter()
            .map(|&(n, _)| n)
            .filter(|&n| self.ledger.is_unclaimed(n))
            .collect();
        let Some(&next) = self.rng.choose(&choices) else {
            return Ok(false);
        };

        if let Some(old) = self.robots[i].tracked_item() {
            if self.ledger.owner(old) == Some(id) {
                self.ledger.release(old);
            }
        }
        self.ledger.claim(next, id);
        self.robots[i].task = Task::Fetch(next);
        self.route_to_item(id, next, false)?;
        Ok(true)
    }

    /// After an exit: route back along the top row and the side wall to the
    /// next assignment.
    pub(crate) fn plan_next_item(&mut self, id: RobotId, item: ItemNumber) -> PbsResult<()> {
        let i = id.index();
        let loc = self.pos(id);
        let Some(item_loc) = self.locate_tracked(id, item)? else {
            return Ok(());
        };

        let mut steps: Vec<PlannedStep> = Vec::new();
        let mut start = loc;
        if !self.grid.cell(loc).is_escort() {
            if let Some(escort) = self.grid.escort_neighbour(loc, id) {
                steps.push(PlannedStep::movement(loc, escort, false));
                start = escort;
            }
        }
        steps.extend(as_moves(return_route(start, item_loc)));

        self.ledger.claim(item, id);
        self.robots[i].task = Task::Fetch(item);
        self.robots[i].set_route(steps);
        Ok(())
    }

    /// Retire the robot to the next free parking cell of its side.
    pub(crate) fn plan_parking(&mut self, id: RobotId) {
        let i = id.index();
        let loc = self.pos(id);
        let side = self.robots[i].side;
        let Some(target) = self.next_parking_cell(side) else {
            self.robots[i].task = Task::Idle;
            return;
        };
        log::debug!("{id} retiring to {target}");

        let mut steps: Vec<PlannedStep> = Vec::new();
        let mut start = loc;
        if let Some(escort) = self.grid.escort_neighbour(loc, id) {
            steps.push(PlannedStep::movement(loc, escort, false));
            start = escort;
        }
        let order = AxisOrder::random(&mut self.rng);
        steps.extend(as_moves(manhattan_steps(start, target, order, RouteKind::Direct)));

        self.robots[i].task = Task::Parking;
        self.robots[i].set_route(steps);
    }

    // ── Conflict helpers ──────────────────────────────────────────────────

    /// Push a dodge around `blocker` onto the front of the robot's queue.
    /// A conflict that resolves to the robot itself is a plan artifact and
    /// is ignored.
    pub(crate) fn escape(&mut self, id: RobotId, blocker: GridPos) {
        if self.grid.robot_at(blocker) == Some(id) {
            return;
        }
        let loc = self.pos(id);
        let steps: Vec<PlannedStep> = as_moves(dodge_steps(loc, blocker, &mut self.rng)).collect();
        self.robots[id.index()].push_front_steps(steps);
    }

    /// The CHECK gate: is the tracked item still one cell away along either
    /// axis?
    pub(crate) fn location_check(&self, id: RobotId) -> bool {
        let loc = self.pos(id);
        let Some(item) = self.robots[id.index()].tracked_item() else {
            return false;
        };
        let Ok(item_loc) = self.grid.find_item(item) else {
            return false;
        };
        let rows = [loc.up().row, loc.down().row];
        let cols = [loc.left().col, loc.right().col];
        rows.contains(&item_loc.row) || cols.contains(&item_loc.col)
    }

    // ── Internal ──────────────────────────────────────────────────────────

    /// Locate a tracked item, clearing the assignment if it vanished from
    /// the board (the claim moved or the item already exited).
    fn locate_tracked(&mut self, id: RobotId, item: ItemNumber) -> PbsResult<Option<GridPos>> {
        match self.grid.find_item(item) {
            Ok(pos) => Ok(Some(pos)),
            Err(PbsError::ItemNotFound(_)) => {
                log::warn!("{id}: tracked {item} is gone; dropping the assignment");
                let i = id.index();
                self.robots[i].task = Task::Idle;
                self.robots[i].queue.clear();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
