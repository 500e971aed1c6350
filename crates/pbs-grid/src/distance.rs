//! Per-side distance lists.
//!
//! For every pending retrieval that no robot has claimed yet, the index
//! records `(item, row + |col − 7|)` — the Manhattan distance to the I/O
//! cell — partitioned by dispatch side (column 7 counts as right).  Both
//! lists are rebuilt from the grid at every tick commit rather than patched
//! incrementally; at 9×15 the scan is trivial and recomputing removes a
//! whole class of desync bugs.

use pbs_core::{ItemNumber, Side};

use crate::grid::Grid;

/// Pending unclaimed items, sorted ascending by distance to the I/O.
/// Ties keep row-major scan order, so rebuilds are deterministic.
#[derive(Clone, Debug, Default)]
pub struct DistanceIndex {
    pub left: Vec<(ItemNumber, u32)>,
    pub right: Vec<(ItemNumber, u32)>,
}

impl DistanceIndex {
    /// Rebuild both lists.  `unclaimed` tells whether an item is still free
    /// (pending retrieval and not assigned to any robot).
    pub fn rebuild(&mut self, grid: &Grid, unclaimed: impl Fn(ItemNumber) -> bool) {
        self.left.clear();
        self.right.clear();

        for pos in grid.positions() {
            let Some(item) = grid.item_at(pos) else { continue };
            if !item.to_exit || !unclaimed(item.number) {
                continue;
            }
            let entry = (item.number, pos.io_distance() as u32);
            match Side::of_dispatch(pos.col) {
                Side::Right => self.right.push(entry),
                _ => self.left.push(entry),
            }
        }

        self.left.sort_by_key(|&(_, d)| d);
        self.right.sort_by_key(|&(_, d)| d);
    }

    /// The list for one warehouse side (`Center` never owns a list; it maps
    /// to the right like the dispatch convention).
    pub fn side(&self, side: Side) -> &[(ItemNumber, u32)] {
        match side {
            Side::Left => &self.left,
            Side::Right | Side::Center => &self.right,
        }
    }
}
