//! Run-report writers.
//!
//! Creates two CSV files in the configured output directory, both named
//! after the warehouse snapshot:
//! - `robots_moves_<tag>.csv` — the chronological move triples per robot;
//!   fictitious (stand-still) moves appear with `from == to`.
//! - `extractions_<tag>.csv` — `(item, exit_tick)` ascending by tick.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use pbs_core::{ItemNumber, Tick};
use pbs_sim::MoveLog;

use crate::PersistResult;

// ── Rows ──────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct MoveRow {
    robot_id: u8,
    seq: usize,
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
    carries: bool,
}

#[derive(Serialize)]
struct ExitRow {
    item: u32,
    exit_tick: u64,
}

// ── Writer ────────────────────────────────────────────────────────────────────

/// Writes the two report files for one run.
pub struct ReportWriter {
    moves: Writer<File>,
    exits: Writer<File>,
    finished: bool,
}

impl ReportWriter {
    /// Create (or truncate) the report files in `dir`.  Headers are emitted
    /// with the first record of each file.
    pub fn new(dir: &Path, tag: &str) -> PersistResult<Self> {
        let moves = Writer::from_path(dir.join(format!("robots_moves_{tag}.csv")))?;
        let exits = Writer::from_path(dir.join(format!("extractions_{tag}.csv")))?;
        Ok(Self { moves, exits, finished: false })
    }

    /// Write every robot's move history in robot order, chronological within
    /// each robot.
    pub fn write_moves(&mut self, log: &MoveLog) -> PersistResult<()> {
        for (index, history) in log.all().iter().enumerate() {
            for (seq, step) in history.iter().enumerate() {
                self.moves.serialize(MoveRow {
                    robot_id: index as u8 + 1,
                    seq,
                    from_row: step.from.row,
                    from_col: step.from.col,
                    to_row: step.to.row,
                    to_col: step.to.col,
                    carries: step.carries,
                })?;
            }
        }
        Ok(())
    }

    /// Write the exit log sorted ascending by exit tick (ties keep their
    /// recorded order).
    pub fn write_exits(&mut self, exits: &[(ItemNumber, Tick)]) -> PersistResult<()> {
        let mut sorted: Vec<_> = exits.to_vec();
        sorted.sort_by_key(|&(_, tick)| tick);
        for (item, tick) in sorted {
            self.exits.serialize(ExitRow { item: item.0, exit_tick: tick.0 })?;
        }
        Ok(())
    }

    /// Flush and close both files.  Idempotent.
    pub fn finish(&mut self) -> PersistResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.exits.flush()?;
        Ok(())
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

/// Report tag derived from the warehouse file stem: its first three
/// characters (`"wh1"` → `robots_moves_wh1.csv`, `extractions_wh1.csv`).
pub fn output_tag(stem: &str) -> String {
    stem.chars().take(3).collect()
}
