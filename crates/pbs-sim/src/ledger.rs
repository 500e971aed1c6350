//! Pending-exit bookkeeping.
//!
//! The ledger tracks which items still have to leave the warehouse and which
//! robot (if any) has claimed each one, plus the append-only record of
//! completed exits.  A `BTreeMap` keys the pending set so iteration order —
//! and with it every derived decision — is deterministic.

use std::collections::BTreeMap;

use pbs_core::{ItemNumber, RobotId, Tick};

/// Items still to retrieve and the exits recorded so far.
#[derive(Debug, Default)]
pub struct ExitLedger {
    /// Pending item → claiming robot (`None` = free for assignment).
    pending: BTreeMap<ItemNumber, Option<RobotId>>,
    /// Completed exits in the order they happened.  Exit ticks only ever
    /// grow, so this is sorted ascending with ties in insertion order.
    exited: Vec<(ItemNumber, Tick)>,
}

impl ExitLedger {
    pub fn new(items: impl IntoIterator<Item = ItemNumber>) -> ExitLedger {
        ExitLedger {
            pending: items.into_iter().map(|n| (n, None)).collect(),
            exited: Vec::new(),
        }
    }

    pub fn is_pending(&self, item: ItemNumber) -> bool {
        self.pending.contains_key(&item)
    }

    /// Pending and not claimed by any robot.
    pub fn is_unclaimed(&self, item: ItemNumber) -> bool {
        self.pending.get(&item) == Some(&None)
    }

    /// The robot currently claiming a pending item, if any.
    pub fn owner(&self, item: ItemNumber) -> Option<RobotId> {
        self.pending.get(&item).copied().flatten()
    }

    pub fn claim(&mut self, item: ItemNumber, robot: RobotId) {
        if let Some(slot) = self.pending.get_mut(&item) {
            *slot = Some(robot);
        }
    }

    /// Return a claimed item to the free pool.
    pub fn release(&mut self, item: ItemNumber) {
        if let Some(slot) = self.pending.get_mut(&item) {
            *slot = None;
        }
    }

    /// Remove `item` from the pending set and record its exit.
    /// Returns the robot that was claiming it.
    pub fn record_exit(&mut self, item: ItemNumber, tick: Tick) -> Option<RobotId> {
        let owner = self.pending.remove(&item).flatten();
        self.exited.push((item, tick));
        owner
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_items(&self) -> impl Iterator<Item = ItemNumber> + '_ {
        self.pending.keys().copied()
    }

    /// Completed exits, ascending by exit tick.
    pub fn exits(&self) -> &[(ItemNumber, Tick)] {
        &self.exited
    }
}
