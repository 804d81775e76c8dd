use criterion::{Criterion, criterion_group, criterion_main};
use metacity_geo::decode::parse_devices;
use metacity_geo::normalize::normalize_devices;
use metacity_geo::{DirectionInterval, GeoPoint, MapConfig, geometry, plan_overlays};
use std::hint::black_box;

fn geometry_benchmark(c: &mut Criterion) {
    let origin = GeoPoint::new(65.059333, 25.466806);

    c.bench_function("cone", |b| {
        let direction = DirectionInterval::from_degrees(-90.0, 90.0);
        b.iter(|| geometry::generate(black_box(origin), black_box(direction), None).unwrap());
    });

    c.bench_function("circle", |b| {
        b.iter(|| {
            geometry::generate(black_box(origin), DirectionInterval::FullCircle, None).unwrap()
        });
    });
}

fn pipeline_benchmark(c: &mut Criterion) {
    let json = std::fs::read("tests/fixtures/devices.json").unwrap();
    let config = MapConfig::default();

    c.bench_function("decode_normalize_plan", |b| {
        b.iter(|| {
            let mut warnings = Vec::new();
            let devices = normalize_devices(parse_devices(&json, &mut warnings).unwrap());

            devices
                .iter()
                .map(|device| plan_overlays(device, Some(12.0), &config).unwrap())
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, geometry_benchmark, pipeline_benchmark);
criterion_main!(benches);
