//! Observer hooks for progress reporting.

use pbs_core::{ItemNumber, Tick};

/// Callbacks invoked by [`Warehouse::run`][crate::Warehouse::run] at key
/// points in the tick loop.  All methods default to no-ops so implementors
/// only override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `moved` is the number of robots that
    /// made a real (non-fictitious) move.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called when an item leaves through the I/O cell.
    fn on_exit(&mut self, _item: ItemNumber, _exit_tick: Tick, _remaining: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
