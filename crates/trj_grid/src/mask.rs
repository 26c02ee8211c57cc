use trj_geo::Vec3;
use trj_traj::Trajectory;

use crate::grid::Grid;

/// How a cell's weight is derived from its segment's distance to the
/// trajectory's starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    /// `WEIGHT=0`: every covered cell counts as 1.
    Uniform,
    /// `WEIGHT=1`: weight equals the great-circle distance in degrees.
    Linear,
    /// `WEIGHT=2`: weight equals the square root of that distance.
    Sqrt,
}

impl WeightMode {
    pub fn from_config(weight: i32) -> Self {
        match weight {
            1 => Self::Linear,
            2 => Self::Sqrt,
            _ => Self::Uniform,
        }
    }

    fn apply(self, distance_deg: f64) -> f64 {
        match self {
            Self::Uniform => 1.0,
            Self::Linear => distance_deg,
            Self::Sqrt => distance_deg.sqrt(),
        }
    }
}

struct Window {
    x_min: usize,
    x_max: usize,
    y_min: usize,
    y_max: usize,
}

impl Window {
    fn whole(grid: &Grid) -> Self {
        Self { x_min: 0, x_max: grid.nx, y_min: 0, y_max: grid.ny }
    }

    /// A `size`-by-`size` cell square (size rounded up to even) centered on
    /// the cell containing `(mid_lon, mid_lat)`, clamped to the grid.
    fn around(grid: &Grid, size: i32, mid_lon: f64, mid_lat: f64) -> Self {
        let size_even = size + (size % 2);
        let half = (size_even / 2).max(0) as i64;

        let delta_lon = grid.delta_lon_at(mid_lat);
        let cx = ((mid_lon - grid.bbox.lon_min) / delta_lon).floor() as i64;
        let cy = ((mid_lat - grid.bbox.lat_min) / grid.delta_lat).floor() as i64;

        let clamp = |v: i64, max: usize| -> usize { v.clamp(0, max as i64) as usize };
        Self {
            x_min: clamp(cx - half, grid.nx),
            x_max: clamp(cx + half, grid.nx),
            y_min: clamp(cy - half, grid.ny),
            y_max: clamp(cy + half, grid.ny),
        }
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }
}

/// Rasterize one trajectory's path into a per-cell weight mask the same
/// shape as `grid`, ready to be folded in with [`Grid::add_mask`].
///
/// `size`: if positive, only cells within a `size`-by-`size` window around
/// `(mid_lon, mid_lat)` are marked; zero or negative means the whole grid.
pub fn rasterize(
    grid: &Grid,
    trajectory: &Trajectory,
    weight_mode: WeightMode,
    size: i32,
    mid_lon: f64,
    mid_lat: f64,
) -> Vec<f64> {
    let mut mask = vec![0.0; grid.nx * grid.ny];
    if trajectory.points.len() < 2 {
        return mask;
    }

    let window = if size > 0 {
        Window::around(grid, size, mid_lon, mid_lat)
    } else {
        Window::whole(grid)
    };

    let start = trajectory.points[0];
    let start_vec = Vec3::from_lon_lat_rad(start.lon_rad, start.lat_rad);

    for pair in trajectory.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (lon_old, lat_old) = (a.lon_rad.to_degrees(), a.lat_rad.to_degrees());
        let (lon_new, lat_new) = (b.lon_rad.to_degrees(), b.lat_rad.to_degrees());

        let mid = Vec3::from_lon_lat_rad(
            (a.lon_rad + b.lon_rad) / 2.0,
            (a.lat_rad + b.lat_rad) / 2.0,
        );
        let weight = weight_mode.apply(mid.angle_deg(&start_vec));

        let delta_lon_old = grid.delta_lon_at(lat_old);
        let delta_lon_new = grid.delta_lon_at(lat_new);
        let x1 = (lon_old - grid.bbox.lon_min) / delta_lon_old;
        let x2 = (lon_new - grid.bbox.lon_min) / delta_lon_new;
        let y1 = (lat_old - grid.bbox.lat_min) / grid.delta_lat;
        let y2 = (lat_new - grid.bbox.lat_min) / grid.delta_lat;

        draw_segment(&mut mask, grid, &window, x1, y1, x2, y2, weight);
    }

    mask
}

fn mark(mask: &mut [f64], grid: &Grid, window: &Window, x: f64, y: f64, weight: f64) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (cx, cy) = (x.floor() as usize, y.floor() as usize);
    if cx >= grid.nx || cy >= grid.ny || !window.contains(cx, cy) {
        return;
    }
    let idx = cy * grid.nx + cx;
    if mask[idx] == 0.0 {
        mask[idx] = weight;
    }
}

/// Walk one trajectory segment in cell space, marking every cell it
/// crosses. Row-aligned segments (`y1 == y2`) step across whole cells;
/// everything else follows the segment's line equation in fine
/// `delta_lat / res_km` substeps, matching the original rasterizer.
#[allow(clippy::too_many_arguments)]
fn draw_segment(
    mask: &mut [f64],
    grid: &Grid,
    window: &Window,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    weight: f64,
) {
    if y1 == y2 {
        let step = if x2 >= x1 { 1.0 } else { -1.0 };
        let mut x = x1;
        loop {
            mark(mask, grid, window, x, y1, weight);
            if (step > 0.0 && x >= x2) || (step < 0.0 && x <= x2) {
                break;
            }
            x += step;
        }
        return;
    }

    let m = (x2 - x1) / (y2 - y1);
    let n = x1 - m * y1;
    let step = (grid.delta_lat / grid.res_km).max(1e-9) * if y2 >= y1 { 1.0 } else { -1.0 };

    let mut y = y1;
    loop {
        let x = m * y + n;
        mark(mask, grid, window, x, y, weight);
        if (step > 0.0 && y >= y2) || (step < 0.0 && y <= y2) {
            break;
        }
        y += step;
    }
    mark(mask, grid, window, x2, y2, weight);
}
