//! `pbs-plan` — pure route generation for the warehouse robots.
//!
//! Everything in this crate is position arithmetic: functions take grid
//! coordinates (plus the run's random stream where a choice is genuinely
//! free) and return step sequences.  No grid access, no robot state — the
//! simulation crate owns those and decides *when* to plan; this crate only
//! knows *how* a robot+escort pair moves.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`walks`]   | One-axis slide-puzzle walks (the movement primitive)    |
//! | [`maneuver`]| Three-step and five-step compound manoeuvres            |
//! | [`manhattan`]| Axis-order choice, fetch redirects, full journeys      |
//! | [`dodge`]   | Perpendicular escape routes around a blocking robot     |

pub mod dodge;
pub mod maneuver;
pub mod manhattan;
pub mod walks;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dodge::dodge_steps;
pub use maneuver::{
    five_step_horizontal, five_step_horizontal_route, five_step_vertical,
    five_step_vertical_route, three_step_horizontal, three_step_route, three_step_vertical,
};
pub use manhattan::{manhattan_steps, return_route, AxisOrder, RouteKind};
pub use walks::{column_walk, row_walk};
