//! `windtrace`: traces a single particle's path across the sphere under
//! a sliding window of hourly ground-station wind observations.

mod error;

use std::process::ExitCode;

use trj_config::TraceConfig;
use trj_time::CalendarPoint;

use error::TraceCliError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("windtrace: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TraceCliError> {
    let config = TraceConfig::from_env()?;
    let start = CalendarPoint::new(config.yyyy, config.mm as u32, config.dd as u32, config.hh as u32);

    let stations = trj_station::load_stations(&config)?;
    let chain = trj_wind::load_chain(&config, &stations, start)?;
    let trajectory = trj_integrate::integrate(&config, &stations, &chain, start)?;
    trj_traj::write_trajectory(&config, &trajectory)?;

    println!(
        "wrote {} waypoints to {}",
        trajectory.points.len(),
        trj_traj::output_filename(&config),
    );
    Ok(())
}
