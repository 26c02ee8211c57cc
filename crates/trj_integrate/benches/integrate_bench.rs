use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trj_config::TraceConfig;
use trj_integrate::integrate;
use trj_station::{SpeedUnit, Station};
use trj_time::CalendarPoint;
use trj_wind::{Snapshot, SnapshotChain, WindSample};

fn config() -> TraceConfig {
    TraceConfig {
        lo: 13.4167,
        la: 52.5167,
        yyyy: 2024,
        mm: 1,
        dd: 1,
        hh: 0,
        trace: 24,
        speed: 2.0,
        rot: 10.0,
        maxr: 200.0,
        minr: 2.0,
        iperh: 20,
        iperpoint: 20,
        zonediff: -1,
        zonename: "MEZ".to_string(),
        station: String::new(),
        meteo: String::new(),
        output: String::new(),
        stddeviation: 0.0,
        dataunit: 0,
        res: 1,
    }
}

fn stations() -> Vec<Station> {
    (0..8)
        .map(|i| Station {
            id: i,
            unit: SpeedUnit::MetersPerSecond,
            position: trj_geo::Vec3::from_lon_lat_rad(
                (10.0 + i as f64).to_radians(),
                (50.0 + i as f64).to_radians(),
            ),
        })
        .collect()
}

fn chain(stations: &[Station]) -> SnapshotChain {
    let mut snaps = Vec::new();
    for h in 0..30u32 {
        let mut s = Snapshot::empty(CalendarPoint::new(2024, 1, 1, h % 24));
        s.samples = Some(stations.iter().map(|_| WindSample::new(3.0, 1.5)).collect());
        snaps.push(s);
    }
    SnapshotChain::new(snaps)
}

fn integrate_bench(c: &mut Criterion) {
    let config = config();
    let stations = stations();
    let chain = chain(&stations);
    let start = CalendarPoint::new(2024, 1, 1, 0);

    c.bench_function("integrate_24h_trajectory", |b| {
        b.iter(|| integrate(black_box(&config), black_box(&stations), black_box(&chain), start))
    });
}

criterion_group!(benches, integrate_bench);
criterion_main!(benches);
