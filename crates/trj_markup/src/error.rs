use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while writing the density markup document.
#[derive(Debug)]
#[non_exhaustive]
pub enum MarkupError {
    Io(std::io::Error),
}

impl Display for MarkupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "couldn't write markup document: {e}"),
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for MarkupError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
