//! Seed-acquisition state machine.
//!
//! Overview
//! - Sequences point-placement events into depth-stratified stages: one
//!   inside click at the volume centre, then outside clicks over five slice
//!   strata (centre, 10%, 25%, 75%, 90% of the navigation axis).
//! - Drives the host at every transition: slice navigation to the new
//!   stage's depth, guidance text with the remaining click count.
//! - On the final point, builds seed solids, runs the segmentation engine,
//!   extracts the foreground volume and reports the outcome exactly once.
//! - Defers placement-mode teardown to the host's idle queue; disarming the
//!   interaction mode from inside its own point callback is not allowed.
//!
//! Modules
//! - [`stages`] – the table-driven stage order, thresholds and depths.
//! - [`options`] – configuration for one machine instance.
//! - `session` – mutable per-run state, created on start and discarded on
//!   completion or cancellation.
//! - `machine` – the [`SeedAcquisition`] implementation.
//!
//! Key ideas
//! - The stage is a pure step function of the cumulative point count; no
//!   boolean phase flags, no way for two phases to be active at once.
//! - Navigation-axis bounds are re-queried from the host at every
//!   transition and never cached across sessions; bounds differ per volume.
//! - At most one session interprets events at any instant: starting a new
//!   run first cancels the active one.

pub mod options;
pub mod stages;

mod machine;
mod session;

pub use machine::SeedAcquisition;
pub use options::AcquisitionParams;
pub use stages::{Stage, TOTAL_PROTOCOL_POINTS};
