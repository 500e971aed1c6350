//! One warehouse cell.

use pbs_core::{ItemNumber, RobotId};

use crate::entities::{Escort, Item};

/// What permanently occupies a cell: an item or an escort slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Payload {
    Item(Item),
    Escort(Escort),
}

/// A cell holds exactly one payload and at most one robot standing on it.
/// Legal combinations: (item, –), (item, robot), (escort, –), (escort, robot).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cell {
    pub payload: Payload,
    pub robot: Option<RobotId>,
}

impl Cell {
    pub fn with_item(item: Item) -> Cell {
        Cell { payload: Payload::Item(item), robot: None }
    }

    /// An escort slot with its robot parked on it (the load-time state).
    pub fn with_escort(owner: RobotId) -> Cell {
        Cell { payload: Payload::Escort(Escort { owner }), robot: Some(owner) }
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.payload {
            Payload::Item(item) => Some(item),
            Payload::Escort(_) => None,
        }
    }

    pub fn item_number(&self) -> Option<ItemNumber> {
        self.item().map(|i| i.number)
    }

    pub fn is_escort(&self) -> bool {
        matches!(self.payload, Payload::Escort(_))
    }

    pub fn escort_owner(&self) -> Option<RobotId> {
        match self.payload {
            Payload::Escort(e) => Some(e.owner),
            Payload::Item(_) => None,
        }
    }

    pub fn has_robot(&self) -> bool {
        self.robot.is_some()
    }
}
