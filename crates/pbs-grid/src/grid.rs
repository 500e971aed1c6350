//! The 9×15 warehouse board.
//!
//! Construction validates the snapshot (shape, escort count, duplicate
//! catalogue numbers, presence of every requested item) and places the five
//! robots on their escort slots in row-major scan order, alternating sides
//! left/right.  All reads are O(grid size); there is a single mutator,
//! [`Grid::move_robot`], which performs the slide-puzzle payload exchange.

use std::collections::BTreeSet;

use pbs_core::layout::{COLS, ROBOT_COUNT, ROWS};
use pbs_core::{GridPos, ItemNumber, PbsError, PbsResult, RobotId, Step};

use crate::cell::{Cell, Payload};
use crate::entities::Item;

/// The warehouse board: a fixed 9×15 array of cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a grid from the loaded snapshot.
    ///
    /// `matrix` is the 9×15 integer matrix (0 = escort slot), `exit_list`
    /// the catalogue numbers to retrieve.  Returns the grid plus the initial
    /// robot positions indexed by `RobotId`.
    pub fn from_matrix(
        matrix: &[Vec<u32>],
        exit_list: &[ItemNumber],
    ) -> PbsResult<(Grid, [GridPos; ROBOT_COUNT])> {
        if matrix.len() != ROWS {
            return Err(PbsError::InvalidInput(format!(
                "expected {ROWS} grid rows, got {}",
                matrix.len()
            )));
        }
        for (r, row) in matrix.iter().enumerate() {
            if row.len() != COLS {
                return Err(PbsError::InvalidInput(format!(
                    "grid row {r} has {} columns, expected {COLS}",
                    row.len()
                )));
            }
        }

        let mut exits = BTreeSet::new();
        for &n in exit_list {
            if !exits.insert(n) {
                return Err(PbsError::InvalidInput(format!(
                    "item {n} appears twice in the exit list"
                )));
            }
        }

        let mut cells = [[Cell::with_item(Item::exited()); COLS]; ROWS];
        let mut seen = BTreeSet::new();
        let mut robot_positions = [GridPos::new(0, 0); ROBOT_COUNT];
        let mut next_robot = 0usize;

        for (r, row) in matrix.iter().enumerate() {
            for (c, &number) in row.iter().enumerate() {
                let pos = GridPos::new(r, c);
                if number == 0 {
                    if next_robot == ROBOT_COUNT {
                        return Err(PbsError::InvalidInput(format!(
                            "more than {ROBOT_COUNT} escort slots in the grid"
                        )));
                    }
                    let id = RobotId::from_index(next_robot);
                    cells[r][c] = Cell::with_escort(id);
                    robot_positions[next_robot] = pos;
                    next_robot += 1;
                } else {
                    if !seen.insert(number) {
                        return Err(PbsError::InvalidInput(format!(
                            "duplicate item number {number} in the grid"
                        )));
                    }
                    let n = ItemNumber(number);
                    cells[r][c] = Cell::with_item(Item::new(n, exits.contains(&n), c));
                }
            }
        }

        if next_robot != ROBOT_COUNT {
            return Err(PbsError::InvalidInput(format!(
                "expected {ROBOT_COUNT} escort slots, found {next_robot}"
            )));
        }
        for &n in &exits {
            if !seen.contains(&n.0) {
                return Err(PbsError::InvalidInput(format!(
                    "exit-list item {n} is not in the grid"
                )));
            }
        }

        Ok((Grid { cells }, robot_positions))
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn cell(&self, pos: GridPos) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    pub fn item_at(&self, pos: GridPos) -> Option<&Item> {
        self.cell(pos).item()
    }

    pub fn item_number_at(&self, pos: GridPos) -> Option<ItemNumber> {
        self.cell(pos).item_number()
    }

    pub fn robot_at(&self, pos: GridPos) -> Option<RobotId> {
        self.cell(pos).robot
    }

    pub fn has_robot(&self, pos: GridPos) -> bool {
        self.cell(pos).has_robot()
    }

    pub fn is_escort(&self, pos: GridPos) -> bool {
        self.cell(pos).is_escort()
    }

    pub fn escort_owner(&self, pos: GridPos) -> Option<RobotId> {
        self.cell(pos).escort_owner()
    }

    /// Scan for the unique cell holding item `number`.
    pub fn find_item(&self, number: ItemNumber) -> PbsResult<GridPos> {
        self.positions()
            .find(|&p| self.item_number_at(p) == Some(number))
            .ok_or(PbsError::ItemNotFound(number))
    }

    /// The robot's own escort, if it sits on an orthogonal neighbour.
    /// `None` means the robot is standing on it (or it drifted, which the
    /// slide mechanics never allow).
    pub fn escort_neighbour(&self, pos: GridPos, robot: RobotId) -> Option<GridPos> {
        pos.neighbours()
            .find(|&n| self.escort_owner(n) == Some(robot))
    }

    /// The first orthogonal neighbour occupied by any robot.
    pub fn robot_neighbour(&self, pos: GridPos) -> Option<GridPos> {
        pos.neighbours().find(|&n| self.has_robot(n))
    }

    /// Where a robot's escort currently sits (full scan; used by the
    /// invariant checks).
    pub fn escort_position(&self, robot: RobotId) -> Option<GridPos> {
        self.positions()
            .find(|&p| self.escort_owner(p) == Some(robot))
    }

    /// All cell coordinates in row-major order.  Captures no borrow of the
    /// grid, so callers may mutate while iterating.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        (0..ROWS).flat_map(|r| (0..COLS).map(move |c| GridPos::new(r, c)))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Commit one robot move.  When the move carries and the destination is
    /// an escort slot, the payloads trade places: the item the robot stood on
    /// advances into the escort cell and the empty slot closes behind it.
    ///
    /// The scheduler validates occupancy before calling; the debug asserts
    /// only guard against desynced plans.
    pub fn move_robot(&mut self, step: Step) {
        debug_assert!(self.has_robot(step.from), "no robot at {}", step.from);
        debug_assert!(!self.has_robot(step.to), "robot collision at {}", step.to);

        let robot = self.cells[step.from.row][step.from.col].robot.take();
        self.cells[step.to.row][step.to.col].robot = robot;

        if step.carries && self.is_escort(step.to) {
            let from_payload = self.cells[step.from.row][step.from.col].payload;
            self.cells[step.from.row][step.from.col].payload =
                self.cells[step.to.row][step.to.col].payload;
            self.cells[step.to.row][step.to.col].payload = from_payload;
        }
    }

    /// Replace a cell's item payload (used when an item leaves through the
    /// I/O cell and the 999 sentinel takes its place).
    pub fn replace_item(&mut self, pos: GridPos, item: Item) {
        self.cells[pos.row][pos.col].payload = Payload::Item(item);
    }
}
