//! Unit 3-vectors on the sphere and conversion to/from longitude/latitude.

/// A 3-vector, normally of unit length when it represents a position on
/// the sphere (station or particle position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert longitude/latitude in radians to a unit 3-vector.
    pub fn from_lon_lat_rad(lon_rad: f64, lat_rad: f64) -> Self {
        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let (sin_lon, cos_lon) = lon_rad.sin_cos();
        Self {
            x: cos_lat * cos_lon,
            y: cos_lat * sin_lon,
            z: sin_lat,
        }
    }

    /// Dot product, i.e. the cosine of the angle between two unit vectors.
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle to `other` in degrees, assuming both are unit vectors.
    pub fn angle_deg(&self, other: &Vec3) -> f64 {
        self.dot(other).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn origin_is_unit_vector() {
        let v = Vec3::from_lon_lat_rad(0.0, 0.0);
        assert!((v.norm() - 1.0).abs() < EPS);
        assert!((v.x - 1.0).abs() < EPS);
        assert!(v.y.abs() < EPS);
        assert!(v.z.abs() < EPS);
    }

    #[test]
    fn north_pole_is_unit_vector() {
        let v = Vec3::from_lon_lat_rad(0.0, FRAC_PI_2);
        assert!((v.norm() - 1.0).abs() < 1e-9);
        assert!((v.z - 1.0).abs() < EPS);
    }

    #[test]
    fn arbitrary_position_is_unit_length() {
        let v = Vec3::from_lon_lat_rad(13.4167_f64.to_radians(), 52.5167_f64.to_radians());
        assert!(((v.norm() * v.norm()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_identical_points_is_zero() {
        let v = Vec3::from_lon_lat_rad(0.3, 0.4);
        assert!(v.angle_deg(&v) < EPS);
    }

    #[test]
    fn angle_between_antipodes_is_180() {
        let a = Vec3::from_lon_lat_rad(0.0, 0.0);
        let b = Vec3::from_lon_lat_rad(std::f64::consts::PI, 0.0);
        assert!((a.angle_deg(&b) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn angle_pole_to_equator_is_90() {
        let pole = Vec3::from_lon_lat_rad(0.0, FRAC_PI_2);
        let equator = Vec3::from_lon_lat_rad(0.0, 0.0);
        assert!((pole.angle_deg(&equator) - 90.0).abs() < 1e-9);
    }
}
