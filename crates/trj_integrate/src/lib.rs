//! Sliding-window wind interpolation and step integration.
//!
//! This crate owns the trajectory integrator's core loop: it walks a
//! particle across the sphere, pulling wind vectors out of a
//! [`trj_wind::SnapshotChain`] through a two-slot window that slides as
//! the particle's simulated clock crosses hour boundaries.

mod error;
mod spatial;
mod state;
mod stepper;

pub use error::IntegrateError;
pub use state::{DataSlot, IntegratorState, init};
pub use stepper::{StepOutcome, integrate};
