//! Ground-station descriptor file parsing for the windtrace trajectory
//! integrator.

mod error;
mod station;

pub use error::StationError;
pub use station::{SpeedUnit, Station, load_stations};
