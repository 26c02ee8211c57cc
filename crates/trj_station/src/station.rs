use std::fs;

use trj_config::{ConfigError, TraceConfig};
use trj_geo::Vec3;

use crate::StationError;

const MAX_LINE_BYTES: usize = 256;

/// Wind speed unit a station reports in. Matches the original encoding:
/// `2` = knots, `1` = meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MetersPerSecond,
    Knots,
}

impl SpeedUnit {
    fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::MetersPerSecond),
            2 => Some(Self::Knots),
            _ => None,
        }
    }
}

/// A ground station: an identifier, a wind-speed unit, and a fixed unit-vector
/// position on the sphere. Immutable after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub id: i32,
    pub unit: SpeedUnit,
    pub position: Vec3,
}

/// Load and parse the station descriptor file named by `config.station`.
pub fn load_stations(config: &TraceConfig) -> Result<Vec<Station>, StationError> {
    let text = fs::read_to_string(&config.station)?;

    let mut stations = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if line.len() > MAX_LINE_BYTES {
            return Err(StationError::BufferOverflow { line_no: idx + 1 });
        }
        stations.push(parse_station_line(line, idx + 1, config.dataunit)?);
    }
    Ok(stations)
}

fn parse_station_line(line: &str, line_no: usize, dataunit: i32) -> Result<Station, StationError> {
    let mut fields = line.split_whitespace();
    let err = || StationError::SyntaxError { line_no };

    let id: i32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let la_raw: f64 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let lo_raw: f64 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let _altitude: &str = fields.next().ok_or_else(err)?;
    let unit_code: i32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;

    let unit = match dataunit {
        0 => SpeedUnit::Knots,
        1 => SpeedUnit::MetersPerSecond,
        2 => SpeedUnit::from_code(unit_code)
            .ok_or(ConfigError::UnknownStationUnit(unit_code))?,
        _ => SpeedUnit::Knots,
    };

    let lat_deg = decode_ddmm(la_raw);
    let lon_deg = decode_ddmm(lo_raw);
    let position = Vec3::from_lon_lat_rad(lon_deg.to_radians(), lat_deg.to_radians());

    Ok(Station { id, unit, position })
}

/// Decode a `±DDMM` / `±DDDMMM`-style value (degrees and minutes packed
/// into a single number, minutes always the last two digits) into decimal
/// degrees. Works uniformly for any number of degree digits and preserves
/// sign through truncation, matching the original integer arithmetic.
fn decode_ddmm(raw: f64) -> f64 {
    let whole_deg = (raw / 100.0).trunc();
    let minutes = raw - 100.0 * whole_deg;
    whole_deg + minutes / 60.0
}
