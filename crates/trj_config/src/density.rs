use crate::ConfigError;
use crate::env::{num, text};

/// Configuration for the density aggregator, resolved once from the
/// process environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    pub filename: String,
    pub inputdir: String,
    /// Grid resolution in kilometers (not to be confused with the
    /// integrator's hour-spacing `RES`).
    pub res: f64,
    pub scalemin: i32,
    pub scalemax: i32,
    /// Opacity byte, e.g. `0xAA`.
    pub opacity: u8,
    pub offlo: f64,
    pub offla: f64,
    /// `0` = identity color mapping, `1..=10` = force every band to one
    /// palette entry.
    pub color: i32,
    /// `0` = absolute frequency, `1` = distance-weighted, `2` = sqrt-distance.
    pub weight: i32,
    pub size: i32,
    pub midlo: f64,
    pub midla: f64,
}

impl DensityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Self {
            filename: text("FILENAME", "freq.kml"),
            inputdir: text("INPUTDIR", "traj/"),
            res: num("RES", 25.0),
            scalemin: num("SCALEMIN", 0),
            scalemax: num("SCALEMAX", 100),
            opacity: parse_opacity(&text("OPACITY", "88")),
            offlo: num("OFFLO", 0.0),
            offla: num("OFFLA", 0.0),
            color: num("COLOR", 0),
            weight: num("WEIGHT", 0),
            size: num("SIZE", 0),
            midlo: num("MIDLO", 13.4167),
            midla: num("MIDLA", 52.5167),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0..self.scalemax).contains(&self.scalemin) || self.scalemax > 100 {
            return Err(ConfigError::BadScale {
                scale_min: self.scalemin,
                scale_max: self.scalemax,
            });
        }
        if !(0..=10).contains(&self.color) {
            return Err(ConfigError::ColorOutOfRange(self.color));
        }
        Ok(())
    }
}

fn parse_opacity(raw: &str) -> u8 {
    u8::from_str_radix(raw.trim(), 16).unwrap_or(0xAA)
}
