// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_affine::{AffineMatrix, BoundingBox, Components};

fn sample_matrix() -> AffineMatrix {
    AffineMatrix::compose(&Components {
        translation: Vec2::new(120.0, -35.0),
        scale: Vec2::new(1.25, 0.8),
        rotation: 0.4,
        origin: Point::new(10.0, 10.0),
    })
}

fn bench_matrix_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine/matrix");
    let m = sample_matrix();
    let n = AffineMatrix::rotation_around_point(-0.2, 50.0, 50.0);

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(black_box(m).multiply(black_box(&n))));
    });
    group.bench_function("invert", |b| {
        b.iter(|| black_box(black_box(m).invert()));
    });
    group.bench_function("decompose", |b| {
        b.iter(|| black_box(black_box(m).decompose()));
    });
    group.bench_function("transform_bounding_box", |b| {
        let bbox = BoundingBox::new(-20.0, -10.0, 300.0, 180.0);
        b.iter(|| black_box(black_box(m).transform_bounding_box(black_box(&bbox))));
    });
    group.finish();
}

fn bench_transform_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine/transform_points");
    let m = sample_matrix();

    for len in [64usize, 1_024, 16_384] {
        let points: Vec<Point> = (0..len)
            .map(|i| Point::new(i as f64, (i % 97) as f64))
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| black_box(m.transform_points(black_box(points))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_ops, bench_transform_points);
criterion_main!(benches);
