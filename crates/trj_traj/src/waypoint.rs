use std::fmt::Write as _;
use std::fs;

use trj_config::TraceConfig;

use crate::TrajError;

/// One trajectory point: longitude/latitude in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub lon_rad: f64,
    pub lat_rad: f64,
}

/// An ordered list of waypoints produced by a single integrator run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    pub points: Vec<Waypoint>,
}

impl Trajectory {
    pub fn push(&mut self, lon_rad: f64, lat_rad: f64) {
        self.points.push(Waypoint { lon_rad, lat_rad });
    }
}

/// `<OUTPUT>/{B|F}YYYYMMDD_HH.trj`, `B` for backward, `F` for forward.
pub fn output_filename(config: &TraceConfig) -> String {
    let dir = config.trace < 0;
    format!(
        "{}{}{:04}{:02}{:02}_{:02}.trj",
        config.output,
        if dir { 'B' } else { 'F' },
        config.yyyy,
        config.mm,
        config.dd,
        config.hh,
    )
}

/// Write the seven-line header, count line, and data lines, matching the
/// original tool's `print_output_file` byte for byte.
pub fn write_trajectory(
    config: &TraceConfig,
    trajectory: &Trajectory,
) -> Result<(), TrajError> {
    let path = output_filename(config);
    let mut out = String::new();

    writeln!(
        out,
        "YYYY={:4} | MM={:2} | DD={:2} | HH={:2} | ZONEDIFF={} | ZONENAME={}",
        config.yyyy, config.mm, config.dd, config.hh, config.zonediff, config.zonename
    )
    .unwrap();
    writeln!(
        out,
        "LO={:8.4} | LA={:8.4} | IPERH={} | IPERPOINT={} | TRACE={}",
        config.lo, config.la, config.iperh, config.iperpoint, config.trace
    )
    .unwrap();
    writeln!(
        out,
        "MINR={} | MAXR={} | STDDEVIATION={:6.3} | RES={} | DATAUNIT={}",
        config.minr as i64, config.maxr as i64, config.stddeviation, config.res, config.dataunit
    )
    .unwrap();
    writeln!(out, "SPEED={:4.2} | ROT={:5.2}", config.speed, config.rot).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Trajektorienpunkte: {}", trajectory.points.len()).unwrap();
    writeln!(out).unwrap();

    for p in &trajectory.points {
        writeln!(out, "{:11.10};{:11.10}", p.lon_rad, p.lat_rad).unwrap();
    }

    fs::write(&path, out)?;
    Ok(())
}

/// Number of free-form header lines (incl. the blank line, count line, and
/// trailing blank line) that precede the data rows in a trajectory file.
pub const HEADER_LINES: usize = 7;

/// Parse a trajectory file written by [`write_trajectory`]: skip exactly
/// [`HEADER_LINES`] lines, then read `lon;lat` rows to EOF.
pub fn read_trajectory(path: &str) -> Result<Trajectory, TrajError> {
    let text = fs::read_to_string(path)?;
    let mut trajectory = Trajectory::default();

    for (idx, line) in text.lines().enumerate().skip(HEADER_LINES) {
        if line.is_empty() {
            continue;
        }
        let (lon_str, lat_str) = line
            .split_once(';')
            .ok_or(TrajError::SyntaxError { line_no: idx + 1 })?;
        let lon: f64 = lon_str
            .trim()
            .parse()
            .map_err(|_| TrajError::SyntaxError { line_no: idx + 1 })?;
        let lat: f64 = lat_str
            .trim()
            .parse()
            .map_err(|_| TrajError::SyntaxError { line_no: idx + 1 })?;
        trajectory.push(lon, lat);
    }

    Ok(trajectory)
}
