use trj_geo::{delta_lat_deg, delta_lon_deg};

use crate::bbox::BoundingBox;
use crate::GridError;

/// The scale endpoints a [`Grid::classify`] pass computed, for reporting
/// in the markup document header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyStats {
    pub w_max: f64,
    pub min: f64,
    pub max: f64,
}

/// A zero-initialized, row-major density grid sized to cover `bbox` at a
/// given resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub bbox: BoundingBox,
    pub res_km: f64,
    pub delta_lat: f64,
    pub nx: usize,
    pub ny: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Size a grid over `bbox` at `res_km` kilometers per cell: walk
    /// latitude in `delta_lat` steps, and for each row count how many
    /// `delta_lon(row_lat)`-wide cells span the longitude range. `nx` is
    /// the longest row seen.
    pub fn size(bbox: BoundingBox, res_km: f64) -> Self {
        let delta_lat = delta_lat_deg(res_km);
        let mut nx = 1usize;
        let mut ny = 0usize;
        let mut y = bbox.lat_min;
        while y <= bbox.lat_max {
            let delta_lon = delta_lon_deg(res_km, y);
            let mut row_len = 1usize;
            let mut x = bbox.lon_min;
            while x < bbox.lon_max {
                row_len += 1;
                x += delta_lon;
            }
            nx = nx.max(row_len);
            ny += 1;
            y += delta_lat;
        }
        let ny = ny.max(1);

        Self {
            bbox,
            res_km,
            delta_lat,
            nx,
            ny,
            cells: vec![0.0; nx * ny],
        }
    }

    pub fn delta_lon_at(&self, lat_deg: f64) -> f64 {
        delta_lon_deg(self.res_km, lat_deg)
    }

    pub fn cell(&self, x: usize, y: usize) -> f64 {
        self.cells[y * self.nx + x]
    }

    /// Add a per-trajectory mask into the global grid, cell by cell.
    pub fn add_mask(&mut self, mask: &[f64]) {
        debug_assert_eq!(mask.len(), self.cells.len());
        for (cell, m) in self.cells.iter_mut().zip(mask.iter()) {
            *cell += m;
        }
    }

    /// Rescale every cell in place to a band in `0..=10` relative to the
    /// maximum cell value, per `SCALEMIN`/`SCALEMAX` percentages. Returns
    /// the scale statistics so callers can report them without having to
    /// recompute `w_max` from already-rewritten cells.
    pub fn classify(&mut self, scale_min: i32, scale_max: i32) -> Result<ClassifyStats, GridError> {
        if !(0..scale_max).contains(&scale_min) || scale_max > 100 {
            return Err(GridError::BadScale { scale_min, scale_max });
        }

        let w_max = self.cells.iter().cloned().fold(0.0_f64, f64::max);
        let min = w_max * scale_min as f64 / 100.0;
        let max = w_max * scale_max as f64 / 100.0;
        let stats = ClassifyStats { w_max, min, max };
        if w_max <= 0.0 {
            return Ok(stats);
        }

        let delta_w = (max - min) / 10.0;

        for cell in self.cells.iter_mut() {
            let band = if delta_w > 0.0 {
                ((*cell - min) / delta_w).floor().clamp(0.0, 10.0)
            } else {
                0.0
            };
            *cell = band;
        }
        Ok(stats)
    }

    /// `(band, x, y)` triples for every non-zero-band cell, in row-major
    /// order, grouped so that callers can bucket by band without a second
    /// pass.
    pub fn nonzero_bands(&self) -> Vec<(u8, usize, usize)> {
        let mut out = Vec::new();
        for y in 0..self.ny {
            for x in 0..self.nx {
                let band = self.cell(x, y);
                if band > 0.0 {
                    out.push((band as u8, x, y));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> BoundingBox {
        BoundingBox {
            lon_min: 10.0,
            lon_max: 11.0,
            lat_min: 50.0,
            lat_max: 51.0,
        }
    }

    #[test]
    fn sizing_allocates_at_least_one_row_and_column() {
        let grid = Grid::size(bbox(), 25.0);
        assert!(grid.nx >= 1);
        assert!(grid.ny >= 1);
    }

    #[test]
    fn classify_rejects_bad_scale() {
        let mut grid = Grid::size(bbox(), 25.0);
        assert!(matches!(
            grid.classify(80, 20),
            Err(GridError::BadScale { .. })
        ));
    }

    #[test]
    fn classify_maps_max_cell_to_band_ten() {
        let mut grid = Grid::size(bbox(), 25.0);
        let last = grid.cells.len() - 1;
        grid.cells[last] = 100.0;
        grid.classify(0, 100).unwrap();
        assert_eq!(grid.cells[last], 10.0);
    }

    #[test]
    fn add_mask_accumulates_across_trajectories() {
        let mut grid = Grid::size(bbox(), 25.0);
        let mut mask = vec![0.0; grid.nx * grid.ny];
        mask[0] = 3.0;
        grid.add_mask(&mask);
        grid.add_mask(&mask);
        assert_eq!(grid.cell(0, 0), 6.0);
    }
}
