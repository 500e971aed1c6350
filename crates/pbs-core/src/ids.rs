//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `RobotId` is 1-based (robots are
//! numbered 1..=5 in scan order of their escort slots); use
//! [`RobotId::index`] when indexing the fixed robot array.

use std::fmt;

use crate::layout::ROBOT_COUNT;

// ── RobotId ───────────────────────────────────────────────────────────────────

/// A robot identifier, 1..=5.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct RobotId(pub u8);

impl RobotId {
    /// Zero-based index into the fixed robot array.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Construct from a zero-based array index.
    #[inline(always)]
    pub fn from_index(i: usize) -> RobotId {
        RobotId(i as u8 + 1)
    }

    /// All robot ids in ascending order.  Scheduling decisions iterate in
    /// this order so random draws stay reproducible.
    pub fn all() -> impl Iterator<Item = RobotId> {
        (1..=ROBOT_COUNT as u8).map(RobotId)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot {}", self.0)
    }
}

// ── ItemNumber ────────────────────────────────────────────────────────────────

/// An item catalogue number (positive integer from the warehouse snapshot).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ItemNumber(pub u32);

impl ItemNumber {
    /// Placed into the I/O cell after an item has been taken out, so the cell
    /// keeps a (non-escort) payload until the next arrival.
    pub const EXITED: ItemNumber = ItemNumber(999);
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
