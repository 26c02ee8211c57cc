use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration validation failures. Numeric parse failures for
/// environment variables are not represented here — per the external
/// interface, a malformed numeric variable silently falls back to `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `SCALEMIN`/`SCALEMAX` outside `0 ≤ SCALEMIN < SCALEMAX ≤ 100`.
    BadScale { scale_min: i32, scale_max: i32 },
    /// `COLOR` outside `0..=10`.
    ColorOutOfRange(i32),
    /// `DATAUNIT` outside `{0,1,2}`.
    BadDataUnit(i32),
    /// `TRACE` is zero; there is no direction to integrate in.
    ZeroTrace,
    /// A station's unit-code field was not `1` or `2` while `DATAUNIT=2`.
    UnknownStationUnit(i32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadScale { scale_min, scale_max } => write!(
                f,
                "invalid scale: SCALEMIN={scale_min} SCALEMAX={scale_max}, require 0 <= SCALEMIN < SCALEMAX <= 100"
            ),
            Self::ColorOutOfRange(c) => write!(f, "COLOR={c} out of range 0..=10"),
            Self::BadDataUnit(u) => write!(f, "DATAUNIT={u} out of range 0..=2"),
            Self::ZeroTrace => write!(f, "TRACE=0: nothing to integrate"),
            Self::UnknownStationUnit(u) => write!(f, "unknown value for unit: {u}"),
        }
    }
}

impl Error for ConfigError {}
