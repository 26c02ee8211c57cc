use std::error::Error;
use std::fmt::{Display, Formatter};

use trj_traj::TrajError;

/// Errors raised while building the density grid from a directory of
/// trajectory files.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    DirectoryMissing(String),
    Traj(TrajError),
    /// `SCALEMIN`/`SCALEMAX` did not satisfy `0 <= SCALEMIN < SCALEMAX <= 100`.
    BadScale { scale_min: i32, scale_max: i32 },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryMissing(path) => write!(f, "input directory {path} does not exist"),
            Self::Traj(e) => Display::fmt(e, f),
            Self::BadScale { scale_min, scale_max } => {
                write!(f, "invalid scale range SCALEMIN={scale_min} SCALEMAX={scale_max}")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Traj(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TrajError> for GridError {
    fn from(e: TrajError) -> Self {
        Self::Traj(e)
    }
}
