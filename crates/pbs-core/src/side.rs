//! Warehouse sides relative to the I/O column.

use std::fmt;

use crate::layout::IO_CELL;

/// Which side of the I/O column (col 7) a cell or robot belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
    /// Exactly on column 7.  Only items carry this value; robots are always
    /// assigned `Left` or `Right`.
    Center,
}

impl Side {
    /// The side recorded on an item when the warehouse is first loaded.
    pub fn of_column(col: usize) -> Side {
        if col < IO_CELL.col {
            Side::Left
        } else if col > IO_CELL.col {
            Side::Right
        } else {
            Side::Center
        }
    }

    /// The side used for dispatching work: which distance list an item joins
    /// and which wall a return route hugs.  Column 7 counts as `Right` here,
    /// so every pending item lands in exactly one of the two lists.
    pub fn of_dispatch(col: usize) -> Side {
        if col >= IO_CELL.col { Side::Right } else { Side::Left }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
            Side::Center => write!(f, "center"),
        }
    }
}
