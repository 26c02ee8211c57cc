use std::error::Error;
use std::fmt::{Display, Formatter};

use trj_config::ConfigError;

/// Errors produced while loading the ground-station descriptor file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StationError {
    /// The descriptor file could not be opened or read.
    UnreadableFile(String),
    /// A line did not have the expected five whitespace-separated fields.
    SyntaxError { line_no: usize },
    /// A line exceeded the 256-byte station line limit.
    BufferOverflow { line_no: usize },
    /// `DATAUNIT=2` but the unit-code field was not `1` or `2`.
    Config(ConfigError),
}

impl Display for StationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableFile(path) => write!(f, "couldn't open file {path}"),
            Self::SyntaxError { line_no } => write!(f, "syntax error in station file, line {line_no}"),
            Self::BufferOverflow { line_no } => {
                write!(f, "station file line {line_no} exceeds 256 bytes")
            }
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for StationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for StationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for StationError {
    fn from(e: std::io::Error) -> Self {
        Self::UnreadableFile(e.to_string())
    }
}
