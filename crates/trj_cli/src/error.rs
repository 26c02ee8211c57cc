use std::error::Error;
use std::fmt::{Display, Formatter};

use trj_config::ConfigError;
use trj_integrate::IntegrateError;
use trj_station::StationError;
use trj_traj::TrajError;
use trj_wind::WindError;

/// Every way a single `windtrace` run can fail, covering §7's hard-error
/// taxonomy for the integrator's share of it.
#[derive(Debug)]
#[non_exhaustive]
pub enum TraceCliError {
    Config(ConfigError),
    Station(StationError),
    Wind(WindError),
    Integrate(IntegrateError),
    Traj(TrajError),
}

impl Display for TraceCliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => Display::fmt(e, f),
            Self::Station(e) => Display::fmt(e, f),
            Self::Wind(e) => Display::fmt(e, f),
            Self::Integrate(e) => Display::fmt(e, f),
            Self::Traj(e) => Display::fmt(e, f),
        }
    }
}

impl Error for TraceCliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Station(e) => Some(e),
            Self::Wind(e) => Some(e),
            Self::Integrate(e) => Some(e),
            Self::Traj(e) => Some(e),
        }
    }
}

impl From<ConfigError> for TraceCliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StationError> for TraceCliError {
    fn from(e: StationError) -> Self {
        Self::Station(e)
    }
}

impl From<WindError> for TraceCliError {
    fn from(e: WindError) -> Self {
        Self::Wind(e)
    }
}

impl From<IntegrateError> for TraceCliError {
    fn from(e: IntegrateError) -> Self {
        Self::Integrate(e)
    }
}

impl From<TrajError> for TraceCliError {
    fn from(e: TrajError) -> Self {
        Self::Traj(e)
    }
}
