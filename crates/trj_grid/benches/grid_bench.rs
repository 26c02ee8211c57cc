use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trj_grid::{BoundingBox, Grid, WeightMode, rasterize};
use trj_traj::{Trajectory, Waypoint};

fn berlin_bbox() -> BoundingBox {
    BoundingBox { lon_min: 5.0, lon_max: 15.0, lat_min: 47.0, lat_max: 55.0 }
}

fn zigzag_trajectory(n: usize) -> Trajectory {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        points.push(Waypoint {
            lon_rad: (6.0 + 0.05 * t).to_radians(),
            lat_rad: (48.0 + 0.03 * (t * 0.7).sin()).to_radians(),
        });
    }
    Trajectory { points }
}

fn grid_bench(c: &mut Criterion) {
    let bbox = berlin_bbox();
    let mut group = c.benchmark_group("grid");
    group.bench_function("size_at_25km", |b| {
        b.iter(|| Grid::size(black_box(bbox), black_box(25.0)))
    });

    let grid = Grid::size(bbox, 25.0);
    let trajectory = zigzag_trajectory(200);
    group.bench_function("rasterize_200_point_trajectory", |b| {
        b.iter(|| {
            rasterize(
                black_box(&grid),
                black_box(&trajectory),
                WeightMode::Linear,
                0,
                10.0,
                50.0,
            )
        })
    });

    let mask = rasterize(&grid, &trajectory, WeightMode::Linear, 0, 10.0, 50.0);
    let mut accumulated = Grid::size(bbox, 25.0);
    group.bench_function("add_mask", |b| {
        b.iter(|| accumulated.add_mask(black_box(&mask)))
    });
    group.finish();
}

criterion_group!(benches, grid_bench);
criterion_main!(benches);
