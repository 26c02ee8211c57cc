use trj_config::TraceConfig;
use trj_geo::{EARTH_RADIUS_KM, Vec3, normalize_coords_deg};
use trj_station::Station;
use trj_time::CalendarPoint;
use trj_traj::Trajectory;
use trj_wind::SnapshotChain;

use crate::spatial::wind_at;
use crate::state::{IntegratorState, init};
use crate::IntegrateError;

/// What happened when the integrator tried to advance one micro-step.
///
/// Running out of station coverage partway through a trajectory is not a
/// hard failure — it's the signal to stop early and keep what's been
/// computed so far, so it's modeled as a plain return value rather than
/// folded into [`IntegrateError`].
pub enum StepOutcome {
    Moved { lon_rad: f64, lat_rad: f64 },
    TruncateHere,
}

/// Advance the particle by one micro-step at sub-hour fraction `h`,
/// against the wind fields currently held in `state`.
#[allow(clippy::too_many_arguments)]
fn step_once(
    lon_rad: f64,
    lat_rad: f64,
    h: f64,
    forward: bool,
    stations: &[Station],
    state: &IntegratorState,
    maxr_km: f64,
    minr_km: f64,
    stddeviation: f64,
    step_size: f64,
) -> StepOutcome {
    let position = Vec3::from_lon_lat_rad(lon_rad, lat_rad);
    match wind_at(
        &position,
        h,
        forward,
        stations,
        &state.current_next,
        &state.current_prev,
        maxr_km,
        minr_km,
        stddeviation,
    ) {
        Some((u, v)) => StepOutcome::Moved {
            lon_rad: lon_rad + step_size * u / lat_rad.cos(),
            lat_rad: lat_rad + step_size * v,
        },
        None => StepOutcome::TruncateHere,
    }
}

/// Integrate a single trajectory from `config.lo`/`config.la` at `start`,
/// advancing `|config.trace|` hours in the direction given by its sign.
///
/// Each waypoint covers `config.iperpoint` micro-steps; the wind field is
/// refreshed on every `config.iperh`-th micro-step boundary, including the
/// very first one, so the initial waypoint stride already blends between
/// two distinct hourly fields rather than the same field twice. If no
/// station is in range at some micro-step, the trajectory is truncated at
/// the last complete waypoint rather than failing outright.
pub fn integrate(
    config: &TraceConfig,
    stations: &[Station],
    chain: &SnapshotChain,
    start: CalendarPoint,
) -> Result<Trajectory, IntegrateError> {
    let forward = config.is_forward();
    let mut state = init(chain, start, forward, config.res)?;

    let mut lon_rad = config.lo.to_radians();
    let mut lat_rad = config.la.to_radians();

    let iperh = config.iperh as i64;
    let iperpoint = config.iperpoint as i64;
    let total_micro_steps = config.trace.unsigned_abs() as i64 * iperh;
    let step_size = (3.6 / (iperh as f64 * EARTH_RADIUS_KM)) * if forward { 1.0 } else { -1.0 };

    let mut trajectory = Trajectory::default();
    trajectory.push(lon_rad, lat_rad);
    let mut step_counter: i64 = 0;

    'points: for _ in 0..(total_micro_steps / iperpoint) {
        for _ in 0..iperpoint {
            if step_counter % iperh == 0 {
                state.advance(chain)?;
            }

            let h = (step_counter % iperh) as f64 / iperh as f64;
            match step_once(
                lon_rad,
                lat_rad,
                h,
                forward,
                stations,
                &state,
                config.maxr,
                config.minr,
                config.stddeviation,
                step_size,
            ) {
                StepOutcome::Moved { lon_rad: new_lon, lat_rad: new_lat } => {
                    lon_rad = new_lon;
                    lat_rad = new_lat;
                }
                StepOutcome::TruncateHere => break 'points,
            }
            step_counter += 1;
        }

        let (lon_deg, lat_deg) = normalize_coords_deg(lon_rad.to_degrees(), lat_rad.to_degrees());
        lon_rad = lon_deg.to_radians();
        lat_rad = lat_deg.to_radians();
        trajectory.push(lon_rad, lat_rad);
    }

    Ok(trajectory)
}
