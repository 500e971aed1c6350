//! The tick loop.
//!
//! One iteration per tick: exit phase, step selection for robots 1..5 from
//! the start-of-tick snapshot, then sequential commits against the live grid
//! (later robots see earlier commits — that ordering is the collision
//! avoidance), then derived-state recomputation and invariant checks.

use pbs_core::layout::{in_restricted_zone, IO_CELL, ROBOT_COUNT};
use pbs_core::{GridPos, PbsError, PbsResult, PlannedStep, RobotId, Tick};
use pbs_grid::{Item, Task};

use crate::observer::SimObserver;
use crate::warehouse::Warehouse;

/// What a run produced.
#[derive(Copy, Clone, Debug)]
pub struct RunSummary {
    /// The clock value after the last processed tick.
    pub total_ticks: Tick,
    pub items_retrieved: usize,
}

impl Warehouse {
    // ── Entry point ───────────────────────────────────────────────────────

    /// Run the simulation to completion.
    ///
    /// Ends when every requested item has exited; a bounded wind-down then
    /// lets the parking routes finish.  Exceeding the tick cap with items
    /// still pending is a fatal [`PbsError::NoProgress`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> PbsResult<RunSummary> {
        let cap = self.tick_cap;
        self.first_assignments()?;

        while !self.ledger.is_done() {
            if self.clock.0 >= cap {
                return Err(PbsError::NoProgress { cap, pending: self.ledger.remaining() });
            }
            self.process_tick(observer)?;
        }

        while self.robots.iter().any(|r| !r.queue.is_empty()) && self.clock.0 < cap {
            self.process_tick(observer)?;
        }

        observer.on_sim_end(self.clock);
        Ok(RunSummary {
            total_ticks: self.clock,
            items_retrieved: self.ledger.exits().len(),
        })
    }

    // ── First tick ────────────────────────────────────────────────────────

    /// Initial work distribution: odd robots draw from the far end of their
    /// side's distance list, even robots from the near end, so close and far
    /// items are attacked at the same time.  Out-of-range draws clamp into
    /// the list; an already-claimed draw leaves the robot idle.
    pub(crate) fn first_assignments(&mut self) -> PbsResult<()> {
        for id in RobotId::all() {
            let side = self.robots[id.index()].side;
            let list = self.distances.side(side);
            if list.is_empty() {
                continue;
            }
            let index = if id.0 % 2 == 1 {
                list.len().saturating_sub(id.0 as usize)
            } else {
                (id.0 as usize - 1).min(list.len() - 1)
            };
            let item = list[index].0;
            if !self.ledger.is_unclaimed(item) {
                continue;
            }
            self.assign_and_route(id, item)?;
        }
        Ok(())
    }

    // ── One tick ──────────────────────────────────────────────────────────

    pub(crate) fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> PbsResult<()> {
        observer.on_tick_start(self.clock);

        self.exit_phase(observer)?;

        let mut apply = [false; ROBOT_COUNT];
        for id in RobotId::all() {
            apply[id.index()] = self.select_step(id)?;
        }

        let mut moved = 0usize;
        for id in RobotId::all() {
            if self.commit_step(id, apply[id.index()])? {
                moved += 1;
            }
        }

        self.refresh_derived();
        self.check_invariants()?;

        observer.on_tick_end(self.clock, moved);
        self.clock.advance();
        Ok(())
    }

    /// If a pending item reached the I/O cell, take it out and re-dispatch
    /// (or retire) the robot that brought it.
    fn exit_phase<O: SimObserver>(&mut self, observer: &mut O) -> PbsResult<()> {
        let Some(number) = self.pending_exit_at(IO_CELL) else {
            return Ok(());
        };

        // the hand-off through the port itself takes one more tick
        let exit_tick = self.clock + 1;
        let owner = self.ledger.record_exit(number, exit_tick);
        self.grid.replace_item(IO_CELL, Item::exited());
        log::info!("{number} retrieved at {exit_tick}; {} remaining", self.ledger.remaining());
        observer.on_exit(number, exit_tick, self.ledger.remaining());

        let Some(owner) = owner else {
            return Ok(());
        };
        self.robots[owner.index()].task = Task::Idle;
        self.robots[owner.index()].queue.clear();

        if self.ledger.is_done() {
            self.plan_parking(owner);
            return Ok(());
        }

        // send the robot for the farthest unclaimed item on its side
        let side = self.robots[owner.index()].side;
        let next = self
            .distances
            .side(side)
            .iter()
            .rev()
            .map(|&(n, _)| n)
            .find(|&n| self.ledger.is_unclaimed(n));
        match next {
            Some(item) => self.plan_next_item(owner, item)?,
            None => self.plan_parking(owner),
        }
        Ok(())
    }

    // ── Step selection ────────────────────────────────────────────────────

    /// Decide whether `id` commits a step this tick.  May plan, re-plan,
    /// dodge, or freeze as a side effect.
    fn select_step(&mut self, id: RobotId) -> PbsResult<bool> {
        let i = id.index();
        let at = self.pos(id);

        if self.robots[i].queue.is_empty() {
            match self.robots[i].task {
                Task::Fetch(_) => self.begin_carry(id)?,
                Task::Carry(_) => self.plan_five_step(id)?,
                Task::Idle | Task::Parking => return Ok(false),
            }
        }

        if matches!(self.robots[i].queue.front(), Some(PlannedStep::Check)) {
            if self.location_check(id) {
                self.robots[i].queue.pop_front();
            } else {
                self.reroute(id)?;
                return Ok(false);
            }
        }

        let Some(&PlannedStep::Move(step)) = self.robots[i].queue.front() else {
            return Ok(false);
        };

        if step.is_fictitious() {
            return Ok(true);
        }

        if let Some(blocker) = self.grid.robot_at(step.to) {
            if self.robots[blocker.index()].is_inactive() && self.robots[i].tracked_item().is_some()
            {
                // an idle robot will not clear the cell on its own; build a
                // fresh route around it instead of dodging forever
                self.reroute(id)?;
                return Ok(false);
            }
            // collision: dodge perpendicular to the conflict, starting now
            self.escape(id, step.to);
            return Ok(true);
        }

        if let Some(owner) = self.grid.escort_owner(step.to) {
            if owner != id {
                return self.foreign_escort_rule(id, owner, at);
            }
        }

        if in_restricted_zone(step.to) && matches!(self.robots[i].task, Task::Carry(_)) {
            if !self.can_proceed(id) {
                if let Some(other) = self.grid.robot_neighbour(at) {
                    self.escape(id, other);
                    return Ok(true);
                }
                self.robots[i].freeze(at);
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Walking into another robot's escort.  If its owner will never clear
    /// it, this robot finds different work; otherwise it waits the blocker
    /// out.
    fn foreign_escort_rule(&mut self, id: RobotId, owner: RobotId, at: GridPos) -> PbsResult<bool> {
        let owner_inactive = self.robots[owner.index()].is_inactive();
        if owner_inactive && !matches!(self.robots[id.index()].task, Task::Parking) {
            if !self.new_route(id)? {
                if self.ledger.is_done() {
                    self.plan_parking(id);
                } else {
                    self.robots[id.index()].freeze(at);
                }
            }
        } else {
            self.robots[id.index()].freeze(at);
        }
        Ok(false)
    }

    /// Restricted-zone arbitration: among carrying robots in the wider area
    /// around the I/O, the one nearest the exit wins (row-major scan breaks
    /// ties).
    fn can_proceed(&self, id: RobotId) -> bool {
        let mut winner: Option<(usize, RobotId)> = None;
        for row in 0..=5 {
            for col in 4..=10 {
                let pos = GridPos::new(row, col);
                let Some(other) = self.grid.robot_at(pos) else {
                    continue;
                };
                if !matches!(self.robots[other.index()].task, Task::Carry(_)) {
                    continue;
                }
                let d = pos.io_distance();
                if winner.is_none_or(|(best, _)| d < best) {
                    winner = Some((d, other));
                }
            }
        }
        winner.is_none_or(|(_, w)| w == id)
    }

    // ── Commit ────────────────────────────────────────────────────────────

    /// Apply (or skip) one robot's step against the live grid.  Returns
    /// whether a real move happened.
    fn commit_step(&mut self, id: RobotId, apply: bool) -> PbsResult<bool> {
        let i = id.index();
        let at = self.pos(id);

        if !apply {
            self.moves.record_fictitious(id, at);
            return Ok(false);
        }

        // earlier commits may have shifted the board: re-gate and re-check
        if matches!(self.robots[i].queue.front(), Some(PlannedStep::Check)) {
            if self.location_check(id) {
                self.robots[i].queue.pop_front();
            } else {
                self.reroute(id)?;
                self.moves.record_fictitious(id, at);
                return Ok(false);
            }
        }

        let Some(&PlannedStep::Move(step)) = self.robots[i].queue.front() else {
            self.moves.record_fictitious(id, at);
            return Ok(false);
        };

        if step.is_fictitious() {
            self.robots[i].queue.pop_front();
            self.moves.record_fictitious(id, at);
            return Ok(false);
        }

        if step.from != at {
            // the plan desynced from the board; rebuild next tick
            log::debug!("{id}: planned step {step} does not start at {at}");
            self.reroute(id)?;
            self.moves.record_fictitious(id, at);
            return Ok(false);
        }

        if self.grid.has_robot(step.to) {
            // an earlier commit claimed the cell: dodge, taking the first
            // dodge step immediately when it is clear
            self.escape(id, step.to);
            if let Some(&PlannedStep::Move(dodge)) = self.robots[i].queue.front() {
                if dodge.from == at && !dodge.is_fictitious() && !self.grid.has_robot(dodge.to) {
                    self.robots[i].queue.pop_front();
                    self.grid.move_robot(dodge);
                    self.positions[i] = dodge.to;
                    self.moves.record(id, dodge);
                    return Ok(true);
                }
            }
            self.moves.record_fictitious(id, at);
            return Ok(false);
        }

        if let Some(owner) = self.grid.escort_owner(step.to) {
            if owner != id {
                self.robots[i].freeze(at);
                self.moves.record_fictitious(id, at);
                return Ok(false);
            }
        }

        self.robots[i].queue.pop_front();
        self.grid.move_robot(step);
        self.positions[i] = step.to;
        self.moves.record(id, step);
        Ok(true)
    }
}
