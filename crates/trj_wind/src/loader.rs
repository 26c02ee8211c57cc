use std::collections::HashMap;
use std::fs;

use trj_config::TraceConfig;
use trj_station::Station;
use trj_time::{CalendarPoint, shift_hours, step_backward, step_forward};

use crate::{Snapshot, SnapshotChain, WindError, WindSample};

const MAX_LINE_BYTES: usize = 256;
/// Knots-to-m/s conversion factor used throughout the original tool.
const KNOTS_TO_MPS: f64 = 1.8532 / 3.6;

/// Build the full hourly snapshot chain for `[start, start + trace]`
/// padded by `res` hours on each side, reading per-day wind files named
/// `<meteo>/bYYMMDD.new` from `config.meteo`.
pub fn load_chain(
    config: &TraceConfig,
    stations: &[Station],
    start: CalendarPoint,
) -> Result<SnapshotChain, WindError> {
    let pad_hours = if config.res == 0 { 24 } else { config.res };
    let trace_hours = config.trace.unsigned_abs() as i64;
    let forward = config.trace > 0;

    let mut interval_start = start;
    if forward {
        shift_hours(&mut interval_start, -(pad_hours as i64));
    } else {
        shift_hours(&mut interval_start, pad_hours as i64);
    }
    let total_hours = trace_hours + 2 * pad_hours as i64;

    let mut hours = Vec::with_capacity(total_hours as usize + 1);
    let mut cursor = interval_start;
    hours.push(cursor);
    for _ in 0..total_hours {
        if forward {
            step_forward(&mut cursor);
        } else {
            step_backward(&mut cursor);
        }
        hours.push(cursor);
    }
    hours.sort();
    hours.dedup();

    let mut days: Vec<(i32, u32, u32)> = hours.iter().map(|t| (t.year, t.month, t.day)).collect();
    days.dedup();

    let mut by_hour: HashMap<CalendarPoint, Vec<WindSample>> = HashMap::new();
    for (year, month, day) in days.drain(..) {
        let path = format!("{}/b{:02}{:02}{:02}.new", config.meteo, year.rem_euclid(100), month, day);
        let blocks = parse_wind_file(&path, stations, config)?;
        for (time, samples) in blocks {
            by_hour.insert(time, samples);
        }
    }

    let snapshots = hours
        .into_iter()
        .map(|time| match by_hour.remove(&time) {
            Some(samples) => Snapshot { time, samples: Some(samples) },
            None => Snapshot::empty(time),
        })
        .collect();

    Ok(SnapshotChain::new(snapshots))
}

/// Parse one `bYYMMDD.new` file into `(timestamp, per-station samples)`
/// blocks. Blocks appear in decreasing-hour order in the file but that
/// ordering is not relied upon here.
fn parse_wind_file(
    path: &str,
    stations: &[Station],
    config: &TraceConfig,
) -> Result<Vec<(CalendarPoint, Vec<WindSample>)>, WindError> {
    let text = fs::read_to_string(path)?;

    let mut blocks = Vec::new();
    let mut current_time: Option<CalendarPoint> = None;
    let mut current_samples: Option<Vec<WindSample>> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if raw_line.len() > MAX_LINE_BYTES {
            return Err(WindError::BufferOverflow { file: path.to_string(), line_no });
        }
        if raw_line.is_empty() {
            continue;
        }

        if raw_line.starts_with(' ') {
            let samples = current_samples.get_or_insert_with(|| {
                vec![WindSample::absent(); stations.len()]
            });
            apply_station_line(raw_line, stations, samples, config, path, line_no)?;
        } else if raw_line.starts_with('*') {
            // *ENDBLOCK sentinel: nothing to do, the next timestamp line
            // (or EOF) closes the block out.
        } else {
            if let (Some(time), Some(samples)) = (current_time.take(), current_samples.take()) {
                blocks.push((time, samples));
            }
            current_time = Some(parse_timestamp_line(raw_line, path, line_no)?);
        }
    }

    if let (Some(time), Some(samples)) = (current_time, current_samples) {
        blocks.push((time, samples));
    }

    Ok(blocks)
}

fn parse_timestamp_line(
    line: &str,
    path: &str,
    line_no: usize,
) -> Result<CalendarPoint, WindError> {
    let err = || WindError::SyntaxError { file: path.to_string(), line_no };
    let mut fields = line.split_whitespace();
    let year: i32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let month: u32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let day: u32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let hour: u32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    Ok(CalendarPoint::new(year, month, day, hour))
}

fn apply_station_line(
    line: &str,
    stations: &[Station],
    samples: &mut [WindSample],
    config: &TraceConfig,
    path: &str,
    line_no: usize,
) -> Result<(), WindError> {
    let err = || WindError::SyntaxError { file: path.to_string(), line_no };
    let mut fields = line.split_whitespace();
    let station_id: i32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let dir_deg: f64 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let speed_raw: f64 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;

    let Some((index, station)) = stations
        .iter()
        .enumerate()
        .find(|(_, s)| s.id == station_id)
    else {
        // Unknown station id: silently discarded per the wind-file contract.
        return Ok(());
    };

    let mut speed = speed_raw;
    if station.unit == trj_station::SpeedUnit::Knots {
        speed *= KNOTS_TO_MPS;
    }
    speed *= config.speed;
    let dir_rad = (dir_deg + config.rot).to_radians();

    samples[index] = WindSample::new(speed * dir_rad.sin(), speed * dir_rad.cos());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i32) -> Station {
        Station {
            id,
            unit: trj_station::SpeedUnit::MetersPerSecond,
            position: trj_geo::Vec3::from_lon_lat_rad(0.0, 0.0),
        }
    }

    fn test_config() -> TraceConfig {
        TraceConfig {
            lo: 0.0,
            la: 0.0,
            yyyy: 2001,
            mm: 3,
            dd: 14,
            hh: 23,
            trace: 1,
            speed: 1.0,
            rot: 0.0,
            maxr: 500.0,
            minr: 50.0,
            iperh: 4,
            iperpoint: 1,
            zonediff: 0,
            zonename: "UTC".to_string(),
            station: "stations.txt".to_string(),
            meteo: ".".to_string(),
            output: ".".to_string(),
            stddeviation: 0.0,
            dataunit: 2,
            res: 1,
        }
    }

    #[test]
    fn parses_single_block_with_endblock_sentinel() {
        let dir = std::env::temp_dir().join(format!("trj_wind_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("b010314.new");
        std::fs::write(
            &path,
            "2001 03 14 23\n 1 145 5\n 2 187 8\n*ENDBLOCK\n",
        )
        .unwrap();

        let stations = vec![station(1), station(2)];
        let blocks = parse_wind_file(path.to_str().unwrap(), &stations, &test_config()).unwrap();
        assert_eq!(blocks.len(), 1);
        let (time, samples) = &blocks[0];
        assert_eq!(*time, CalendarPoint::new(2001, 3, 14, 23));
        assert!(samples[0].present);
        assert!(samples[1].present);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_station_is_dropped_silently() {
        let dir = std::env::temp_dir().join(format!("trj_wind_test2_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("b010314.new");
        std::fs::write(&path, "2001 03 14 23\n 99 145 5\n*ENDBLOCK\n").unwrap();

        let stations = vec![station(1)];
        let blocks = parse_wind_file(path.to_str().unwrap(), &stations, &test_config()).unwrap();
        assert!(!blocks[0].1[0].present);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn multiple_blocks_in_decreasing_hour_order() {
        let dir = std::env::temp_dir().join(format!("trj_wind_test3_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("b010314.new");
        std::fs::write(
            &path,
            "2001 03 14 23\n 1 145 5\n*ENDBLOCK\n2001 03 14 22\n 1 187 8\n*ENDBLOCK\n",
        )
        .unwrap();

        let stations = vec![station(1)];
        let blocks = parse_wind_file(path.to_str().unwrap(), &stations, &test_config()).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].0, CalendarPoint::new(2001, 3, 14, 23));
        assert_eq!(blocks[1].0, CalendarPoint::new(2001, 3, 14, 22));

        std::fs::remove_dir_all(&dir).ok();
    }
}
