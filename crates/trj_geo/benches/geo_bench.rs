use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trj_geo::{Vec3, delta_lon_deg};

fn geo_bench(c: &mut Criterion) {
    let berlin = Vec3::from_lon_lat_rad(13.4167_f64.to_radians(), 52.5167_f64.to_radians());
    let paris = Vec3::from_lon_lat_rad(2.3522_f64.to_radians(), 48.8566_f64.to_radians());

    let mut group = c.benchmark_group("geo");
    group.bench_function("from_lon_lat_rad", |b| {
        b.iter(|| Vec3::from_lon_lat_rad(black_box(0.2345), black_box(0.9123)))
    });
    group.bench_function("angle_deg", |b| b.iter(|| black_box(berlin).angle_deg(&paris)));
    group.bench_function("delta_lon_deg", |b| {
        b.iter(|| delta_lon_deg(black_box(50.0), black_box(52.5167)))
    });
    group.finish();
}

criterion_group!(benches, geo_bench);
criterion_main!(benches);
