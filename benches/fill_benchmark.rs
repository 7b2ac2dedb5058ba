//! Benchmark for polygon fills.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scanfill::{fill, Canvas, Rasterizer, Vertex};
use std::hint::black_box;

/// Star with `points` spikes inscribed in a circle of radius `r`
fn star(points: usize, r: f64) -> Vec<Vertex> {
    (0..points * 2)
        .map(|i| {
            let a = i as f64 * std::f64::consts::PI / points as f64;
            let r = if i % 2 == 0 { r } else { r * 0.45 };
            Vertex::new((r + r * a.cos()).round() as i64, (r + r * a.sin()).round() as i64)
        })
        .collect()
}

fn fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for points in [5, 50, 500] {
        let vs = star(points, 500.0);
        group.bench_with_input(BenchmarkId::from_parameter(points), &vs, |b, vs| {
            b.iter(|| {
                let mut n = 0u64;
                fill(black_box(vs), |x, y| n = n.wrapping_add((x ^ y) as u64));
                n
            });
        });
    }

    group.finish();
}

fn canvas_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_polygon");

    let mut canvas = Canvas::new(1000, 1000).expect("canvas");
    let ras = Rasterizer::new();
    let vs = star(50, 500.0);

    group.bench_function("star_50_1000x1000", |b| {
        b.iter(|| ras.draw_polygon(black_box(&vs), &mut canvas));
    });

    group.finish();
}

criterion_group!(benches, fill_benchmark, canvas_benchmark);
criterion_main!(benches);
