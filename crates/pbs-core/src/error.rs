//! Simulator error taxonomy.
//!
//! `InvalidInput` is reported at load time and aborts the run.
//! `PlannerStuck` is recoverable: the scheduler re-routes the affected robot
//! and retries on the next tick.  `NoProgress` and `InvariantViolation` are
//! fatal and surface to the caller with enough context to diagnose the state.

use thiserror::Error;

use crate::ids::{ItemNumber, RobotId};
use crate::pos::GridPos;
use crate::tick::Tick;

/// The top-level error type shared by all `pbs-*` crates.
#[derive(Debug, Error)]
pub enum PbsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("item {0} not found in the grid")]
    ItemNotFound(ItemNumber),

    #[error("planner produced no steps for {robot} at {at}")]
    PlannerStuck { robot: RobotId, at: GridPos },

    #[error("no progress: tick cap {cap} reached with {pending} items still pending")]
    NoProgress { cap: u64, pending: usize },

    #[error("invariant violated at {tick}: {detail}")]
    InvariantViolation { tick: Tick, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pbs-*` crates.
pub type PbsResult<T> = Result<T, PbsError>;
