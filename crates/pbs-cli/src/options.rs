use std::path::PathBuf;

use clap::Parser;

/// Puzzle-based storage warehouse simulator.
///
/// Plans the retrieval of a set of items from a 9×15 sliding-puzzle
/// warehouse with five robots and writes the per-robot move history plus the
/// item exit log next to the snapshot name.
#[derive(Parser, Debug)]
pub struct Options {
    /// Warehouse snapshot (headerless CSV, 9 rows × 15 columns; 0 marks an
    /// escort slot).
    pub warehouse: PathBuf,

    /// Items to retrieve (CSV of catalogue numbers).
    #[arg(short, long, default_value = "items_list.csv")]
    pub items: PathBuf,

    /// Master RNG seed; the same seed and inputs reproduce a run exactly.
    #[arg(long, default_value_t = 666)]
    pub seed: u64,

    /// Directory for the move and extraction reports.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Cap on simulation ticks (default: derived from the item count).
    #[arg(long, value_name = "TICKS")]
    pub max_ticks: Option<u64>,
}
