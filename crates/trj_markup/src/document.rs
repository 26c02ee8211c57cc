use std::fmt::Write as _;
use std::fs;

use trj_config::DensityConfig;
use trj_grid::{ClassifyStats, Grid};
use trj_traj::Trajectory;

use crate::MarkupError;
use crate::color::{colorclass, style_color};

fn weight_description(weight: i32) -> &'static str {
    match weight {
        1 => "distance to start point",
        2 => "square root of distance to start point",
        _ => "none (absolute frequency)",
    }
}

/// Write the complete density markup document: KML header, ten color
/// styles, a folder of trajectory line strings, and a folder of density
/// bands (1..=10, band 0 omitted), each containing one polygon per cell.
pub fn write_document(
    config: &DensityConfig,
    grid: &Grid,
    stats: &ClassifyStats,
    trajectories: &[(String, Trajectory)],
) -> Result<(), MarkupError> {
    let mut out = String::new();
    let classes = colorclass(config.color);

    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>").unwrap();
    writeln!(out, "<kml xmlns=\"http://earth.google.com/kml/2.1\">").unwrap();
    writeln!(out, "<Document>\n").unwrap();
    writeln!(out, "<description>trajectory density").unwrap();
    writeln!(out, "Resolution: {0}x{0} km", config.res as i64).unwrap();
    writeln!(out, "Weighting: {}", weight_description(config.weight)).unwrap();
    writeln!(out, "</description>\n").unwrap();
    writeln!(out, "<name>{}</name>\n", config.filename).unwrap();

    for band in 1..=10 {
        writeln!(out, "<Style id=\"{band}\">").unwrap();
        writeln!(out, "<PolyStyle>").unwrap();
        writeln!(out, "<color>{}</color>", style_color(config.opacity, &classes, band)).unwrap();
        writeln!(out, "<colorMode>normal</colorMode>").unwrap();
        writeln!(out, "</PolyStyle>").unwrap();
        writeln!(out, "</Style>\n").unwrap();
    }

    write_trajectory_folder(&mut out, config, trajectories);
    write_density_folder(&mut out, config, grid, stats);

    writeln!(out, "</Document>").unwrap();
    write!(out, "</kml>").unwrap();

    fs::write(&config.filename, out)?;
    Ok(())
}

fn write_trajectory_folder(out: &mut String, config: &DensityConfig, trajectories: &[(String, Trajectory)]) {
    writeln!(out, "<Folder>").unwrap();
    writeln!(out, "<name>Trajectories</name>").unwrap();

    for (name, trajectory) in trajectories {
        writeln!(out, "<Folder>").unwrap();
        writeln!(out, "<name>{name}</name>").unwrap();
        writeln!(out, "<Placemark>").unwrap();
        writeln!(out, "<visibility>0</visibility>").unwrap();
        writeln!(out, "<LineString>").unwrap();
        writeln!(out, "<coordinates>").unwrap();
        for point in &trajectory.points {
            writeln!(
                out,
                "{:.6},{:.6},0",
                point.lon_rad.to_degrees() + config.offlo,
                point.lat_rad.to_degrees() + config.offla,
            )
            .unwrap();
        }
        writeln!(out, "</coordinates>").unwrap();
        writeln!(out, "</LineString>").unwrap();
        writeln!(out, "</Placemark>").unwrap();
        writeln!(out, "</Folder>\n").unwrap();
    }

    writeln!(out, "</Folder>\n").unwrap();
}

fn write_density_folder(out: &mut String, config: &DensityConfig, grid: &Grid, stats: &ClassifyStats) {
    writeln!(out, "<Folder>").unwrap();
    writeln!(out, "<name>Density</name>").unwrap();
    writeln!(
        out,
        "<description>maximum: {:.2}\nscale maximum: {:.2}\nscale minimum: {:.2}\nplot center: {:.2} {:.2}\nplot size: {}x{} cells</description>",
        stats.w_max, stats.max, stats.min, config.midlo, config.midla, config.size, config.size,
    )
    .unwrap();

    for band in 1..=10u8 {
        let percent = (band as f64 * (stats.max - stats.min) / 10.0 + stats.min) * 100.0
            / stats.w_max.max(f64::EPSILON);
        writeln!(out, "<Folder>").unwrap();
        writeln!(out, "<name>from {percent:.0}%</name>").unwrap();

        for y in 0..grid.ny {
            for x in 0..grid.nx {
                if grid.cell(x, y) as u8 != band {
                    continue;
                }
                write_cell_polygon(out, config, grid, band, x, y);
            }
        }

        writeln!(out, "</Folder>\n").unwrap();
    }

    writeln!(out, "</Folder>\n").unwrap();
}

fn write_cell_polygon(out: &mut String, config: &DensityConfig, grid: &Grid, band: u8, x: usize, y: usize) {
    let lat0 = grid.bbox.lat_min + y as f64 * grid.delta_lat;
    let lat1 = lat0 + grid.delta_lat;
    let dx0 = grid.delta_lon_at(lat0);
    let dx1 = grid.delta_lon_at(lat1);
    let lon0 = grid.bbox.lon_min + x as f64 * dx0;

    let corners = [
        (lon0, lat0),
        (lon0 + dx0, lat0),
        (lon0 + dx1, lat1),
        (lon0, lat1),
        (lon0, lat0),
    ];

    writeln!(out, "<Placemark>").unwrap();
    writeln!(out, "<styleUrl>#{band}</styleUrl>").unwrap();
    writeln!(out, "<Polygon>").unwrap();
    writeln!(out, "<altitudeMode>relativeToGround</altitudeMode>").unwrap();
    writeln!(out, "<outerBoundaryIs>").unwrap();
    writeln!(out, "<LinearRing>").unwrap();
    writeln!(out, "<coordinates>").unwrap();
    for (lon, lat) in corners {
        writeln!(out, "{:.6},{:.6},0", lon + config.offlo, lat + config.offla).unwrap();
    }
    writeln!(out, "</coordinates>").unwrap();
    writeln!(out, "</LinearRing>").unwrap();
    writeln!(out, "</outerBoundaryIs>").unwrap();
    writeln!(out, "</Polygon>").unwrap();
    writeln!(out, "</Placemark>\n").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use trj_grid::BoundingBox;
    use trj_traj::Waypoint;

    fn config(filename: &str) -> DensityConfig {
        DensityConfig {
            filename: filename.to_string(),
            inputdir: "traj/".to_string(),
            res: 25.0,
            scalemin: 0,
            scalemax: 100,
            opacity: 0x88,
            offlo: 0.0,
            offla: 0.0,
            color: 0,
            weight: 0,
            size: 0,
            midlo: 13.4,
            midla: 52.5,
        }
    }

    #[test]
    fn document_contains_kml_envelope_and_band_folders() {
        let dir = std::env::temp_dir().join(format!("trj_markup_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("freq.kml");
        let cfg = config(path.to_str().unwrap());

        let bbox = BoundingBox { lon_min: 0.0, lon_max: 1.0, lat_min: 0.0, lat_max: 1.0 };
        let mut grid = Grid::size(bbox, 25.0);
        let mut mask = vec![0.0; grid.nx * grid.ny];
        mask[0] = 5.0;
        grid.add_mask(&mask);
        let stats = grid.classify(0, 100).unwrap();

        let mut trajectory = Trajectory::default();
        trajectory.points.push(Waypoint { lon_rad: 0.1, lat_rad: 0.1 });
        trajectory.points.push(Waypoint { lon_rad: 0.2, lat_rad: 0.2 });

        write_document(&cfg, &grid, &stats, &[("F20010101_00".to_string(), trajectory)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains("<Style id=\"1\">"));
        assert!(text.contains("<visibility>0</visibility>"));
        assert!(text.trim_end().ends_with("</kml>"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
