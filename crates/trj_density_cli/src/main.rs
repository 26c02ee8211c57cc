//! `windtrace-density`: folds a directory of trajectory waypoint files into
//! a single density grid and writes it out as a markup map.

mod error;

use std::path::Path;
use std::process::ExitCode;

use trj_config::DensityConfig;
use trj_grid::{BoundingBox, Grid, WeightMode, list_trajectory_files, rasterize};
use trj_traj::{Trajectory, read_trajectory};

use error::DensityCliError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("windtrace-density: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DensityCliError> {
    let config = DensityConfig::from_env()?;
    let dir = Path::new(&config.inputdir);

    let files = list_trajectory_files(dir)?;
    let mut trajectories: Vec<(String, Trajectory)> = Vec::with_capacity(files.len());
    for path in &files {
        let trajectory = read_trajectory(path.to_str().unwrap_or_default())?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        trajectories.push((name, trajectory));
    }

    let bbox = bounding_box(&trajectories);
    let mut grid = Grid::size(bbox, config.res);

    let weight_mode = WeightMode::from_config(config.weight);
    for (_, trajectory) in &trajectories {
        let mask = rasterize(&grid, trajectory, weight_mode, config.size, config.midlo, config.midla);
        grid.add_mask(&mask);
    }

    let stats = grid.classify(config.scalemin, config.scalemax)?;
    trj_markup::write_document(&config, &grid, &stats, &trajectories)?;

    println!(
        "folded {} trajectories into a {}x{} grid, wrote {}",
        trajectories.len(),
        grid.nx,
        grid.ny,
        config.filename,
    );
    Ok(())
}

fn bounding_box(trajectories: &[(String, Trajectory)]) -> BoundingBox {
    let mut bbox: Option<BoundingBox> = None;
    for (_, trajectory) in trajectories {
        for point in &trajectory.points {
            let (lon, lat) = (point.lon_rad.to_degrees(), point.lat_rad.to_degrees());
            bbox = Some(match bbox {
                None => BoundingBox { lon_min: lon, lon_max: lon, lat_min: lat, lat_max: lat },
                Some(b) => BoundingBox {
                    lon_min: b.lon_min.min(lon),
                    lon_max: b.lon_max.max(lon),
                    lat_min: b.lat_min.min(lat),
                    lat_max: b.lat_max.max(lat),
                },
            });
        }
    }
    bbox.unwrap_or(BoundingBox { lon_min: 0.0, lon_max: 0.0, lat_min: 0.0, lat_max: 0.0 })
}
