use std::error::Error;
use std::fmt::{Display, Formatter};

use trj_wind::WindError;

/// Errors raised while sliding the wind-interpolation window or stepping
/// a trajectory through it. A station going out of range mid-trajectory
/// is not represented here — see [`crate::stepper::StepOutcome`], which the
/// stepping function returns instead so that soft truncation isn't
/// mistaken for a hard failure.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IntegrateError {
    /// Propagated from chain navigation or a data-spacing mismatch.
    Wind(WindError),
}

impl Display for IntegrateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wind(e) => Display::fmt(e, f),
        }
    }
}

impl Error for IntegrateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Wind(e) => Some(e),
        }
    }
}

impl From<WindError> for IntegrateError {
    fn from(e: WindError) -> Self {
        Self::Wind(e)
    }
}
