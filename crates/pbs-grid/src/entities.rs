//! Item and escort value types.

use std::fmt;

use pbs_core::{ItemNumber, RobotId, Side};

// ── Item ──────────────────────────────────────────────────────────────────────

/// A stored item.
///
/// `side` is fixed when the warehouse snapshot is loaded, from the item's
/// *initial* column; it is deliberately not updated as the item gets pushed
/// around, because it encodes which detour direction clears the I/O column
/// for this item on the final approach.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Item {
    pub number: ItemNumber,
    /// True while this item is scheduled for retrieval.
    pub to_exit: bool,
    pub side: Side,
}

impl Item {
    pub fn new(number: ItemNumber, to_exit: bool, col: usize) -> Item {
        Item { number, to_exit, side: Side::of_column(col) }
    }

    /// The sentinel payload left in the I/O cell after a retrieval.
    pub fn exited() -> Item {
        Item { number: ItemNumber::EXITED, to_exit: false, side: Side::Center }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.to_exit {
            write!(f, "{} to exit", self.number)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

// ── Escort ────────────────────────────────────────────────────────────────────

/// The single permanently-empty cell bound to one robot.  Escorts are never
/// created or destroyed after load; they only trade places with items as
/// their robot slides through the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Escort {
    pub owner: RobotId,
}

impl fmt::Display for Escort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "escort/{}", self.owner.0)
    }
}
