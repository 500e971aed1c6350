//! Grid coordinates.
//!
//! Row 0 is the top of the warehouse, where the I/O cell sits; row indices
//! grow downward, away from the I/O.  Column 7 is the I/O column.  Moving a
//! robot from row r to row r−1 therefore brings it *closer* to the exit.
//!
//! Neighbour accessors clamp at the edges instead of wrapping: probing "down"
//! from row 8 yields the cell itself.  Call sites that must distinguish a
//! real neighbour from the clamped self-cell compare against the origin.

use std::fmt;

use crate::layout::{COLS, IO_CELL, ROWS};

/// A cell coordinate, `(row, col)` with row ∈ 0..9 and col ∈ 0..15.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> GridPos {
        GridPos { row, col }
    }

    /// Manhattan distance to the I/O cell: `row + |col − 7|`.
    #[inline]
    pub fn io_distance(self) -> usize {
        self.row + self.col.abs_diff(IO_CELL.col)
    }

    // ── Clamped single-cell neighbours ────────────────────────────────────

    /// One row toward the I/O (row − 1), clamped at the top edge.
    #[inline]
    pub fn up(self) -> GridPos {
        GridPos::new(self.row.saturating_sub(1), self.col)
    }

    /// One row away from the I/O (row + 1), clamped at the bottom edge.
    #[inline]
    pub fn down(self) -> GridPos {
        GridPos::new((self.row + 1).min(ROWS - 1), self.col)
    }

    #[inline]
    pub fn left(self) -> GridPos {
        GridPos::new(self.row, self.col.saturating_sub(1))
    }

    #[inline]
    pub fn right(self) -> GridPos {
        GridPos::new(self.row, (self.col + 1).min(COLS - 1))
    }

    /// The up-to-four orthogonal neighbours that exist inside the grid, in
    /// the fixed probe order down, up, left, right.
    pub fn neighbours(self) -> impl Iterator<Item = GridPos> {
        [self.down(), self.up(), self.left(), self.right()]
            .into_iter()
            .filter(move |&n| n != self)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
