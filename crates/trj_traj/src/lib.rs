//! Trajectory waypoint file reading and writing for windtrace.
//!
//! The trajectory integrator's only external output is this file format;
//! the density aggregator's only external input is the same format,
//! trusting the integrator's declared header size rather than re-parsing
//! the header fields themselves.

mod error;
mod waypoint;

pub use error::TrajError;
pub use waypoint::{HEADER_LINES, Trajectory, Waypoint, output_filename, read_trajectory, write_trajectory};
