//! Benchmarks for spiral evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use road_geom::fresnel::normalized_spiral;
use road_geom::Spiral;

fn bench_normalized_spiral(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalized_spiral");

    // one arclength per approximation branch; the scale factor for
    // k = 0.1 is sqrt(pi/0.1), about 5.6
    for (label, s) in [("series", 0.5), ("rational", 15.0), ("asymptotic", 40.0)] {
        group.bench_function(label, |b| {
            b.iter(|| normalized_spiral(black_box(s), black_box(0.1)))
        });
    }

    group.finish();
}

fn bench_get_point(c: &mut Criterion) {
    let spiral = Spiral::create(0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.1).unwrap();
    let mut group = c.benchmark_group("get_point");

    group.bench_function("single", |b| {
        b.iter(|| spiral.get_point(black_box(5.0), black_box(0.0)))
    });

    for count in [100usize, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let s = 10.0 * i as f64 / count as f64;
                    black_box(spiral.get_point(s, 0.0));
                }
            })
        });
    }

    group.finish();
}

fn bench_get_bbox(c: &mut Criterion) {
    let gentle = Spiral::create(0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.1).unwrap();
    let winding = Spiral::create(0.0, 1.0, -2.0, 0.0, 60.0, 0.05, 0.2).unwrap();
    let arc = Spiral::create(0.0, 3.0, 2.0, 0.9, 5.0, 0.5, 0.5).unwrap();

    let mut group = c.benchmark_group("get_bbox");
    group.bench_function("gentle", |b| b.iter(|| black_box(&gentle).get_bbox()));
    group.bench_function("winding", |b| b.iter(|| black_box(&winding).get_bbox()));
    group.bench_function("arc", |b| b.iter(|| black_box(&arc).get_bbox()));
    group.finish();
}

criterion_group!(
    benches,
    bench_normalized_spiral,
    bench_get_point,
    bench_get_bbox
);
criterion_main!(benches);
