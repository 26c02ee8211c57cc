//! Spherical geometry and equal-area grid sizing shared by the windtrace
//! trajectory integrator and density aggregator.
//!
//! Both tools treat the Earth as a unit sphere: positions are stored as
//! longitude/latitude in radians and converted to unit 3-vectors whenever
//! an angular distance or weighting factor is needed.

mod grid_cell;
mod normalize;
mod vec3;

pub use grid_cell::{KM_PER_DEGREE, delta_lat_deg, delta_lon_deg};
pub use normalize::{normalize_coords_deg, normalize_lat_deg, normalize_lon_deg};
pub use vec3::Vec3;

/// Mean Earth radius in km used throughout the integrator (`RE` in the
/// original documentation). Do not recompute from first principles —
/// downstream bit-comparability depends on this exact value.
pub const EARTH_RADIUS_KM: f64 = 6370.0;
