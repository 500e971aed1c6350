//! CSV snapshot loaders.
//!
//! # Formats
//!
//! Both files are headerless.  The warehouse snapshot is the 9×15 integer
//! matrix, one grid row per CSV row:
//!
//! ```csv
//! 1,2,3,4,5,6,7,8,9,10,11,12,13,14,15
//! 16,0,17,18, …
//! ```
//!
//! The retrieval list is a sequence of catalogue numbers; one per row and
//! comma-separated rows are both accepted (all fields are flattened in
//! order).
//!
//! Shape and content validation (row/column counts, escort count, duplicate
//! or missing numbers) happens in the simulation crate when the warehouse is
//! built — the loaders only parse.

use std::io::Read;
use std::path::Path;

use pbs_core::ItemNumber;

use crate::PersistResult;

// ── Warehouse snapshot ────────────────────────────────────────────────────────

/// Load the warehouse matrix from a CSV file.
pub fn load_grid_csv(path: &Path) -> PersistResult<Vec<Vec<u32>>> {
    let file = std::fs::File::open(path)?;
    load_grid_reader(file)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.  Useful for tests
/// (pass a `std::io::Cursor`).
pub fn load_grid_reader<R: Read>(reader: R) -> PersistResult<Vec<Vec<u32>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<Vec<u32>>() {
        rows.push(record?);
    }
    Ok(rows)
}

// ── Retrieval list ────────────────────────────────────────────────────────────

/// Load the list of items to retrieve from a CSV file.
pub fn load_exit_list_csv(path: &Path) -> PersistResult<Vec<ItemNumber>> {
    let file = std::fs::File::open(path)?;
    load_exit_list_reader(file)
}

/// Like [`load_exit_list_csv`] but accepts any `Read` source.
pub fn load_exit_list_reader<R: Read>(reader: R) -> PersistResult<Vec<ItemNumber>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for record in csv_reader.deserialize::<Vec<u32>>() {
        items.extend(record?.into_iter().map(ItemNumber));
    }
    Ok(items)
}
