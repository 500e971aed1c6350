//! `pbs-sim` — the warehouse simulation proper.
//!
//! # Tick loop
//!
//! ```text
//! tick 1: first assignments — three robots take close items, two take far
//! every following tick:
//!   ① Exit     — a pending item sitting in the I/O cell leaves the
//!                warehouse; its robot is re-dispatched or retired.
//!   ② Select   — robots 1..5 in order choose (or plan) their next step and
//!                resolve conflicts: CHECK gates, collisions, foreign
//!                escorts, the restricted zone around the I/O.
//!   ③ Commit   — steps apply sequentially in id order against the live
//!                grid; every robot logs exactly one move per tick.
//!   ④ Derive   — robot positions and distance lists are recomputed from
//!                the grid and the board invariants re-checked.
//! ```
//!
//! The main loop ends when no pending exits remain; a bounded wind-down then
//! drains the parking routes.  All randomness comes from the single seeded
//! stream in [`pbs_core::SimRng`], so a run is a pure function of
//! (seed, inputs).

pub mod history;
pub mod ledger;
pub mod observer;
pub mod planner;
pub mod scheduler;
pub mod warehouse;

mod invariants;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use history::MoveLog;
pub use ledger::ExitLedger;
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::RunSummary;
pub use warehouse::Warehouse;
