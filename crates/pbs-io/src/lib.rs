//! `pbs-io` — the serialization boundary of the simulator.
//!
//! Two inputs: the warehouse snapshot (9×15 integer matrix, headerless CSV,
//! 0 = escort slot) and the retrieval list (catalogue numbers).  Two
//! outputs per run, tagged by the snapshot's name: `robots_moves_<tag>.csv`
//! (the per-robot move history) and `extractions_<tag>.csv` (item exit
//! ticks).
//!
//! The boundary is deliberately thin: loading produces plain matrices and
//! number lists that `pbs-sim` validates; writing serializes the finished
//! logs.  Nothing here touches simulation state.

pub mod error;
pub mod loader;
pub mod report;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PersistError, PersistResult};
pub use loader::{load_exit_list_csv, load_exit_list_reader, load_grid_csv, load_grid_reader};
pub use report::{output_tag, ReportWriter};
