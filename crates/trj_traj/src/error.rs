use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while writing or reading a trajectory waypoint file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TrajError {
    UnreadableFile(String),
    /// A data line was not a valid `lon;lat` pair.
    SyntaxError { line_no: usize },
    /// The header's declared point count and the number of data lines on
    /// disk disagree.
    CountMismatch { declared: usize, found: usize },
}

impl Display for TrajError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableFile(path) => write!(f, "couldn't open file {path}"),
            Self::SyntaxError { line_no } => write!(f, "syntax error in trajectory file, line {line_no}"),
            Self::CountMismatch { declared, found } => write!(
                f,
                "trajectory file declares {declared} points but has {found}"
            ),
        }
    }
}

impl Error for TrajError {}

impl From<std::io::Error> for TrajError {
    fn from(e: std::io::Error) -> Self {
        Self::UnreadableFile(e.to_string())
    }
}
