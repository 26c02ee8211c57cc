use std::error::Error;
use std::fmt::{Display, Formatter};

use trj_config::ConfigError;
use trj_grid::GridError;
use trj_markup::MarkupError;

/// Every way a single density-aggregation run can fail.
#[derive(Debug)]
#[non_exhaustive]
pub enum DensityCliError {
    Config(ConfigError),
    Grid(GridError),
    Markup(MarkupError),
}

impl Display for DensityCliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => Display::fmt(e, f),
            Self::Grid(e) => Display::fmt(e, f),
            Self::Markup(e) => Display::fmt(e, f),
        }
    }
}

impl Error for DensityCliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Markup(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DensityCliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for DensityCliError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<MarkupError> for DensityCliError {
    fn from(e: MarkupError) -> Self {
        Self::Markup(e)
    }
}
