//! Hourly wind-snapshot chain assembly for the windtrace trajectory
//! integrator.
//!
//! This crate owns the two hardest pieces of bookkeeping the integrator
//! depends on: the block-structured per-day wind file lexer, and the
//! arena-based snapshot chain that replaces the original tool's
//! intrusive doubly linked list of per-hour records.

mod error;
mod loader;
mod sample;
mod snapshot;

pub use error::WindError;
pub use loader::load_chain;
pub use sample::WindSample;
pub use snapshot::{Snapshot, SnapshotChain};
