//! Equal-area grid cell sizing.
//!
//! The density grid is built from a resolution in kilometers. Latitude
//! spacing is constant everywhere; longitude spacing widens toward the
//! poles to keep cells roughly square, following the `cos(lat)` correction
//! used throughout the original mapping tool.

/// Kilometers per degree of latitude (and of longitude at the equator).
/// Fixed, not derived from [`crate::EARTH_RADIUS_KM`] — downstream output
/// is pinned to this exact constant.
pub const KM_PER_DEGREE: f64 = 111.178;

/// Latitude span, in degrees, of a cell `res_km` kilometers tall.
pub fn delta_lat_deg(res_km: f64) -> f64 {
    res_km / KM_PER_DEGREE
}

/// Longitude span, in degrees, of a cell `res_km` kilometers wide at
/// latitude `lat_deg`. Blows up near the poles, same as the original.
pub fn delta_lon_deg(res_km: f64, lat_deg: f64) -> f64 {
    res_km / (KM_PER_DEGREE * lat_deg.to_radians().cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_delta_scales_linearly_with_resolution() {
        let d1 = delta_lat_deg(10.0);
        let d2 = delta_lat_deg(20.0);
        assert!((d2 - 2.0 * d1).abs() < 1e-12);
    }

    #[test]
    fn lon_delta_equals_lat_delta_at_equator() {
        let lat = delta_lat_deg(25.0);
        let lon = delta_lon_deg(25.0, 0.0);
        assert!((lat - lon).abs() < 1e-9);
    }

    #[test]
    fn lon_delta_widens_away_from_equator() {
        let at_equator = delta_lon_deg(10.0, 0.0);
        let at_60 = delta_lon_deg(10.0, 60.0);
        assert!(at_60 > at_equator * 1.9);
    }
}
