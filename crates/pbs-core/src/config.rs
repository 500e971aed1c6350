//! Per-run configuration.

use crate::layout::DEFAULT_SEED;

/// Knobs for one simulation run.  Everything about the warehouse geometry is
/// frozen in [`crate::layout`]; only the random seed and the safety cap on
/// total ticks vary between runs.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and inputs always produce
    /// byte-identical outputs.
    pub seed: u64,

    /// Cap on total simulation ticks.  `None` derives the cap from the item
    /// count via [`crate::layout::default_tick_cap`].
    pub max_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig { seed: DEFAULT_SEED, max_ticks: None }
    }
}

impl SimConfig {
    /// Resolve the effective tick cap for a run retrieving `item_count` items.
    pub fn tick_cap(&self, item_count: usize) -> u64 {
        self.max_ticks
            .unwrap_or_else(|| crate::layout::default_tick_cap(item_count))
    }
}
