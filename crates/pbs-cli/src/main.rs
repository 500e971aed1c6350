//! `pbs` — retrieve items from a puzzle-based storage warehouse.
//!
//! Loads the snapshot and retrieval list, runs the deterministic tick
//! simulation, and writes `robots_moves_<tag>.csv` and
//! `extractions_<tag>.csv` into the output directory.  Exit code 0 on
//! success; planner failures (no progress, invariant violations) report
//! their diagnostic context and exit non-zero.

mod options;

use anyhow::Context;
use clap::Parser;

use pbs_core::{ItemNumber, SimConfig, Tick};
use pbs_io::{load_exit_list_csv, load_grid_csv, output_tag, ReportWriter};
use pbs_sim::{SimObserver, Warehouse};

use options::Options;

/// Prints one line per retrieved item, mirroring the exit log as it grows.
struct ConsoleObserver;

impl SimObserver for ConsoleObserver {
    fn on_exit(&mut self, item: ItemNumber, exit_tick: Tick, remaining: usize) {
        println!("{item} out at {exit_tick}; {remaining} remaining");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::parse();

    let matrix = load_grid_csv(&options.warehouse)
        .with_context(|| format!("loading warehouse snapshot {}", options.warehouse.display()))?;
    let exits = load_exit_list_csv(&options.items)
        .with_context(|| format!("loading retrieval list {}", options.items.display()))?;

    let config = SimConfig { seed: options.seed, max_ticks: options.max_ticks };
    let mut warehouse = Warehouse::new(&matrix, &exits, &config)?;

    let summary = warehouse.run(&mut ConsoleObserver)?;

    std::fs::create_dir_all(&options.out_dir)?;
    let stem = options
        .warehouse
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("run");
    let tag = output_tag(stem);

    let mut writer = ReportWriter::new(&options.out_dir, &tag)?;
    writer.write_moves(&warehouse.moves)?;
    writer.write_exits(warehouse.ledger.exits())?;
    writer.finish()?;

    println!(
        "retrieved {} items in {} ticks; reports tagged \"{tag}\" in {}",
        summary.items_retrieved,
        summary.total_ticks.0,
        options.out_dir.display()
    );
    Ok(())
}
