use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while loading or navigating the wind-snapshot chain.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WindError {
    /// A wind data file could not be opened or read.
    UnreadableFile(String),
    /// A timestamp or wind-data line did not have the expected fields.
    SyntaxError { file: String, line_no: usize },
    /// A line exceeded the 256-byte wind-file line limit.
    BufferOverflow { file: String, line_no: usize },
    /// Navigation ran off the end of the chain with no non-empty snapshot
    /// in the requested direction.
    ChainExhausted,
    /// Adjacent data-slot spacing was zero, exceeded 24 hours, or did not
    /// match a configured `RES`.
    DataResolution { hours: i32, expected: i32 },
}

impl Display for WindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableFile(path) => write!(f, "couldn't open file {path}"),
            Self::SyntaxError { file, line_no } => {
                write!(f, "syntax error in wind data, {file} line {line_no}")
            }
            Self::BufferOverflow { file, line_no } => {
                write!(f, "{file} line {line_no} exceeds 256 bytes")
            }
            Self::ChainExhausted => write!(f, "get_next/prev_element: end of list!"),
            Self::DataResolution { hours, expected } => {
                if *expected == 0 {
                    write!(f, "data spacing of {hours}h is invalid")
                } else {
                    write!(f, "data spacing {hours}h does not match RES={expected}h")
                }
            }
        }
    }
}

impl Error for WindError {}

impl From<std::io::Error> for WindError {
    fn from(e: std::io::Error) -> Self {
        Self::UnreadableFile(e.to_string())
    }
}
