use trj_geo::{EARTH_RADIUS_KM, Vec3};
use trj_station::Station;
use trj_wind::WindSample;

struct Contribution {
    weight: f64,
    u: f64,
    v: f64,
}

struct WeightedField {
    u: f64,
    v: f64,
    w: f64,
}

impl WeightedField {
    fn value(&self) -> Option<(f64, f64)> {
        (self.w > 0.0).then_some((self.u / self.w, self.v / self.w))
    }
}

fn weighted_field(
    position: &Vec3,
    stations: &[Station],
    samples: &[WindSample],
    maxr_km: f64,
    minr_km: f64,
    stddeviation: f64,
) -> WeightedField {
    let cos_max_r = (maxr_km / EARTH_RADIUS_KM).cos();
    let cos_min_r = (minr_km / EARTH_RADIUS_KM).cos();

    let mut in_range: Vec<Contribution> = stations
        .iter()
        .zip(samples.iter())
        .filter_map(|(station, sample)| {
            if !sample.present {
                return None;
            }
            let c = position.dot(&station.position);
            if c <= cos_max_r {
                return None;
            }
            let c = c.min(cos_min_r);
            let weight = 1.0 / c.acos().powi(2);
            Some(Contribution {
                weight,
                u: sample.u,
                v: sample.v,
            })
        })
        .collect();

    if stddeviation > 0.0 && in_range.len() > 1 {
        reject_outliers(&mut in_range, stddeviation);
    }

    in_range
        .iter()
        .fold(WeightedField { u: 0.0, v: 0.0, w: 0.0 }, |acc, c| WeightedField {
            u: acc.u + c.weight * c.u,
            v: acc.v + c.weight * c.v,
            w: acc.w + c.weight,
        })
}

/// Drop stations whose `u` or `v` reading is more than `stddeviation`
/// standard deviations from the mean of the in-range set.
fn reject_outliers(samples: &mut Vec<Contribution>, stddeviation: f64) {
    let n = samples.len() as f64;
    let mean_u = samples.iter().map(|c| c.u).sum::<f64>() / n;
    let mean_v = samples.iter().map(|c| c.v).sum::<f64>() / n;
    let std_u = (samples.iter().map(|c| (c.u - mean_u).powi(2)).sum::<f64>() / n).sqrt();
    let std_v = (samples.iter().map(|c| (c.v - mean_v).powi(2)).sum::<f64>() / n).sqrt();

    samples.retain(|c| {
        (std_u == 0.0 || ((c.u - mean_u) / std_u).abs() <= stddeviation)
            && (std_v == 0.0 || ((c.v - mean_v) / std_v).abs() <= stddeviation)
    });
}

/// Wind at `position` blended between the two hourly slots at sub-hour
/// fraction `h`. `current_next` is the later-hour field, `current_prev`
/// the earlier-hour one; for `h == 0` a forward trace stands in on
/// `current_next` alone and a backward trace on `current_prev` alone,
/// mirroring which edge of the window the particle is walking away from.
/// Returns `None` rather than erroring when no station has a usable
/// sample in one of the slots — the caller decides whether that means
/// truncating the trajectory.
#[allow(clippy::too_many_arguments)]
pub fn wind_at(
    position: &Vec3,
    h: f64,
    forward: bool,
    stations: &[Station],
    current_next: &[WindSample],
    current_prev: &[WindSample],
    maxr_km: f64,
    minr_km: f64,
    stddeviation: f64,
) -> Option<(f64, f64)> {
    if h == 0.0 {
        let slot = if forward { current_next } else { current_prev };
        return weighted_field(position, stations, slot, maxr_km, minr_km, stddeviation).value();
    }

    let next = weighted_field(position, stations, current_next, maxr_km, minr_km, stddeviation);
    let prev = weighted_field(position, stations, current_prev, maxr_km, minr_km, stddeviation);
    let (u_n, v_n) = next.value()?;
    let (u_p, v_p) = prev.value()?;

    let (w_next, w_prev) = if forward { (1.0 - h, h) } else { (h, 1.0 - h) };
    Some((
        w_next * u_n + w_prev * u_p,
        w_next * v_n + w_prev * v_p,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i32, lon_deg: f64, lat_deg: f64) -> Station {
        Station {
            id,
            unit: trj_station::SpeedUnit::MetersPerSecond,
            position: Vec3::from_lon_lat_rad(lon_deg.to_radians(), lat_deg.to_radians()),
        }
    }

    #[test]
    fn single_station_in_range_is_returned_verbatim_at_h_zero() {
        let stations = vec![station(1, 0.0, 0.0)];
        let samples = vec![WindSample::new(3.0, -1.0)];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let (u, v) = wind_at(
            &position, 0.0, true, &stations, &samples, &samples, 200.0, 2.0, 0.0,
        )
        .unwrap();
        assert!((u - 3.0).abs() < 1e-9);
        assert!((v - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn station_beyond_maxr_is_excluded() {
        let stations = vec![station(1, 90.0, 0.0)];
        let samples = vec![WindSample::new(3.0, -1.0)];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let result = wind_at(
            &position, 0.0, true, &stations, &samples, &samples, 200.0, 2.0, 0.0,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn blend_at_half_hour_averages_both_slots_for_a_colocated_station() {
        let stations = vec![station(1, 0.0, 0.0)];
        let prev = vec![WindSample::new(0.0, 0.0)];
        let next = vec![WindSample::new(10.0, 0.0)];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let (u, _) = wind_at(
            &position, 0.5, true, &stations, &next, &prev, 200.0, 2.0, 0.0,
        )
        .unwrap();
        assert!((u - 5.0).abs() < 1e-9);
    }

    #[test]
    fn forward_h_zero_uses_the_next_hour_slot() {
        let stations = vec![station(1, 0.0, 0.0)];
        let prev = vec![WindSample::new(0.0, 0.0)];
        let next = vec![WindSample::new(10.0, 0.0)];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let (u, _) =
            wind_at(&position, 0.0, true, &stations, &next, &prev, 200.0, 2.0, 0.0).unwrap();
        assert!((u - 10.0).abs() < 1e-9);
    }

    #[test]
    fn backward_h_zero_uses_the_previous_hour_slot() {
        let stations = vec![station(1, 0.0, 0.0)];
        let prev = vec![WindSample::new(0.0, 0.0)];
        let next = vec![WindSample::new(10.0, 0.0)];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let (u, _) =
            wind_at(&position, 0.0, false, &stations, &next, &prev, 200.0, 2.0, 0.0).unwrap();
        assert!(u.abs() < 1e-9);
    }

    #[test]
    fn outlier_rejection_drops_a_station_far_from_the_mean() {
        let stations = vec![
            station(1, 0.0, 0.0),
            station(2, 0.1, 0.0),
            station(3, -0.1, 0.0),
            station(4, 0.05, 0.05),
        ];
        let samples = vec![
            WindSample::new(1.0, 1.0),
            WindSample::new(1.1, 0.9),
            WindSample::new(0.9, 1.1),
            WindSample::new(50.0, 50.0),
        ];
        let position = Vec3::from_lon_lat_rad(0.0, 0.0);

        let (u, _) = wind_at(
            &position, 0.0, true, &stations, &samples, &samples, 200.0, 2.0, 1.0,
        )
        .unwrap();
        assert!(u < 2.0, "outlier station should have been rejected, got u={u}");
    }
}
