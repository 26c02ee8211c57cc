use std::fs;
use std::path::Path;

use trj_traj::read_trajectory;

use crate::GridError;

/// A lon/lat bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

/// Every non-dotfile entry of `dir`, sorted, in the order the aggregator
/// processes trajectory files in (directory-scan order, per the ordering
/// rule both tools follow).
pub fn list_trajectory_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, GridError> {
    if !dir.is_dir() {
        return Err(GridError::DirectoryMissing(dir.display().to_string()));
    }

    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|_| GridError::DirectoryMissing(dir.display().to_string()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .collect();
    entries.sort();
    Ok(entries)
}

/// Scan every non-dotfile entry of `dir`, read it as a trajectory file, and
/// reduce over all waypoints of all files to a single bounding box in
/// degrees.
pub fn scan_directory(dir: &Path) -> Result<BoundingBox, GridError> {
    let entries = list_trajectory_files(dir)?;

    let mut bbox: Option<BoundingBox> = None;
    for path in &entries {
        let trajectory = read_trajectory(path.to_str().unwrap_or_default())?;
        for point in &trajectory.points {
            let (lon, lat) = (point.lon_rad.to_degrees(), point.lat_rad.to_degrees());
            bbox = Some(match bbox {
                None => BoundingBox {
                    lon_min: lon,
                    lon_max: lon,
                    lat_min: lat,
                    lat_max: lat,
                },
                Some(b) => BoundingBox {
                    lon_min: b.lon_min.min(lon),
                    lon_max: b.lon_max.max(lon),
                    lat_min: b.lat_min.min(lat),
                    lat_max: b.lat_max.max(lat),
                },
            });
        }
    }

    Ok(bbox.unwrap_or(BoundingBox {
        lon_min: 0.0,
        lon_max: 0.0,
        lat_min: 0.0,
        lat_max: 0.0,
    }))
}
