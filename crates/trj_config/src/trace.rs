use crate::ConfigError;
use crate::env::{num, text};

/// Configuration for the trajectory integrator, resolved once from the
/// process environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    pub lo: f64,
    pub la: f64,
    pub yyyy: i32,
    pub mm: i32,
    pub dd: i32,
    pub hh: i32,
    /// Trace duration in hours; sign gives direction. Forward if positive.
    pub trace: i32,
    pub speed: f64,
    pub rot: f64,
    pub maxr: f64,
    pub minr: f64,
    pub iperh: i32,
    pub iperpoint: i32,
    pub zonediff: i32,
    pub zonename: String,
    pub station: String,
    pub meteo: String,
    pub output: String,
    pub stddeviation: f64,
    pub dataunit: i32,
    /// Expected hour spacing between adjacent wind snapshots; `0` disables
    /// the check.
    pub res: i32,
}

impl TraceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Self {
            lo: num("LO", 13.4167),
            la: num("LA", 52.5167),
            yyyy: num("YYYY", 2000),
            mm: num("MM", 1),
            dd: num("DD", 1),
            hh: num("HH", 0),
            trace: num("TRACE", -96),
            speed: num("SPEED", 2.0),
            rot: num("ROT", 10.0),
            maxr: num("MAXR", 200.0),
            minr: num("MINR", 2.0),
            iperh: num("IPERH", 20),
            iperpoint: num("IPERPOINT", 20),
            zonediff: num("ZONEDIFF", -1),
            zonename: text("ZONENAME", "MEZ"),
            station: text("STATION", "wstation.dat"),
            meteo: text("METEO", "meteo/"),
            output: text("OUTPUT", "traj/"),
            stddeviation: num("STDDEVIATION", 0.0),
            dataunit: num("DATAUNIT", 0),
            res: num("RES", 3),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trace == 0 {
            return Err(ConfigError::ZeroTrace);
        }
        if !(0..=2).contains(&self.dataunit) {
            return Err(ConfigError::BadDataUnit(self.dataunit));
        }
        Ok(())
    }

    pub fn is_forward(&self) -> bool {
        self.trace > 0
    }
}
