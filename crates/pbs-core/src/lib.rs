//! `pbs-core` — foundational types for the `rust_pbs` warehouse simulator.
//!
//! This crate is a dependency of every other `pbs-*` crate.  It intentionally
//! has no `pbs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `RobotId`, `ItemNumber`                                |
//! | [`pos`]    | `GridPos` and clamped neighbour math                   |
//! | [`side`]   | `Side` (left/right/center of the I/O column)           |
//! | [`layout`] | Frozen warehouse geometry: dims, I/O cell, zones, …    |
//! | [`step`]   | `Step`, `PlannedStep` (queue entries with CHECK gates) |
//! | [`tick`]   | `Tick` — the discrete simulation clock                 |
//! | [`rng`]    | `SimRng` — the single seeded random stream             |
//! | [`config`] | `SimConfig` — per-run knobs (seed, tick cap)           |
//! | [`error`]  | `PbsError`, `PbsResult`                                |

pub mod config;
pub mod error;
pub mod ids;
pub mod layout;
pub mod pos;
pub mod rng;
pub mod side;
pub mod step;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{PbsError, PbsResult};
pub use ids::{ItemNumber, RobotId};
pub use pos::GridPos;
pub use rng::SimRng;
pub use side::Side;
pub use step::{PlannedStep, Step};
pub use tick::Tick;
