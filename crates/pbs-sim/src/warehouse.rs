//! Warehouse state: the grid, the five robots, and the derived indices.

use std::collections::VecDeque;

use pbs_core::layout::{IO_CELL, PARKING_LEFT, PARKING_RIGHT, ROBOT_COUNT, ROBOT_SIDE_PATTERN};
use pbs_core::{GridPos, ItemNumber, PbsResult, RobotId, Side, SimConfig, SimRng, Tick};
use pbs_grid::{DistanceIndex, Grid, Robot};

use crate::history::MoveLog;
use crate::ledger::ExitLedger;

/// The complete simulation state.
///
/// The grid is ground truth; `positions` and `distances` are caches
/// recomputed from it at every tick commit rather than patched in place.
pub struct Warehouse {
    pub grid: Grid,
    /// The five robots, indexed by `RobotId`.
    pub robots: [Robot; ROBOT_COUNT],
    /// Derived: each robot's current cell, ascending id order.
    pub positions: [GridPos; ROBOT_COUNT],
    /// Derived: unclaimed pending items by side, sorted by distance to I/O.
    pub distances: DistanceIndex,
    pub ledger: ExitLedger,
    pub moves: MoveLog,
    /// The current tick.  The first movement tick is 1.
    pub clock: Tick,

    pub(crate) rng: SimRng,
    pub(crate) parking_left: VecDeque<GridPos>,
    pub(crate) parking_right: VecDeque<GridPos>,
    pub(crate) tick_cap: u64,
}

impl Warehouse {
    /// Build the simulation from a loaded snapshot and the retrieval list.
    pub fn new(
        matrix: &[Vec<u32>],
        exit_list: &[ItemNumber],
        config: &SimConfig,
    ) -> PbsResult<Warehouse> {
        let (grid, positions) = Grid::from_matrix(matrix, exit_list)?;
        let robots = std::array::from_fn(|i| {
            Robot::new(RobotId::from_index(i), ROBOT_SIDE_PATTERN[i])
        });

        let mut warehouse = Warehouse {
            grid,
            robots,
            positions,
            distances: DistanceIndex::default(),
            ledger: ExitLedger::new(exit_list.iter().copied()),
            moves: MoveLog::default(),
            clock: Tick(1),
            rng: SimRng::new(config.seed),
            parking_left: PARKING_LEFT.into(),
            parking_right: PARKING_RIGHT.into(),
            tick_cap: config.tick_cap(exit_list.len()),
        };
        warehouse.refresh_derived();
        Ok(warehouse)
    }

    // ── Derived-state maintenance ─────────────────────────────────────────

    /// Recompute robot positions and the distance lists from the grid.
    pub(crate) fn refresh_derived(&mut self) {
        for pos in self.grid.positions() {
            if let Some(id) = self.grid.robot_at(pos) {
                self.positions[id.index()] = pos;
            }
        }
        let grid = &self.grid;
        let ledger = &self.ledger;
        self.distances.rebuild(grid, |n| ledger.is_unclaimed(n));
    }

    // ── Small queries ─────────────────────────────────────────────────────

    pub(crate) fn pos(&self, id: RobotId) -> GridPos {
        self.positions[id.index()]
    }

    /// The item at `pos`, if it is still scheduled for retrieval.
    pub(crate) fn pending_exit_at(&self, pos: GridPos) -> Option<ItemNumber> {
        let n = self.grid.item_number_at(pos)?;
        self.ledger.is_pending(n).then_some(n)
    }

    /// The first cell around the I/O holding a pending item, probed in the
    /// fixed order (0,6), (0,8), (1,7).
    pub(crate) fn around_io(&self) -> Option<GridPos> {
        [
            GridPos::new(IO_CELL.row, IO_CELL.col - 1),
            GridPos::new(IO_CELL.row, IO_CELL.col + 1),
            GridPos::new(IO_CELL.row + 1, IO_CELL.col),
        ]
        .into_iter()
        .find(|&p| self.pending_exit_at(p).is_some())
    }

    /// Pop the next free parking cell for a side.
    pub(crate) fn next_parking_cell(&mut self, side: Side) -> Option<GridPos> {
        match side {
            Side::Left => self.parking_left.pop_front(),
            Side::Right | Side::Center => self.parking_right.pop_front(),
        }
    }
}
