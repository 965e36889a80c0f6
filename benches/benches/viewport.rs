// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_viewport::{BoundingBox, Constraints, Viewport, ViewportController};

fn bounded_controller() -> ViewportController {
    let constraints = Constraints {
        snap_to_grid: true,
        bounding_box: Some(BoundingBox::new(0.0, 0.0, 4_096.0, 4_096.0)),
        ..Constraints::default()
    };
    let mut vc = ViewportController::new(Viewport::new(1_280.0, 720.0), Some(constraints));
    vc.on_transform_change(|t| {
        black_box(t.matrix);
    });
    vc
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/pipeline");

    // A drag of 256 pointer moves, as a host would feed at display rate.
    group.bench_function("drag_256_moves", |b| {
        b.iter_batched(
            bounded_controller,
            |mut vc| {
                vc.start_pan(Point::new(640.0, 360.0));
                for i in 0..256 {
                    let t = f64::from(i);
                    vc.update_pan(Point::new(640.0 + t, 360.0 - t * 0.5));
                }
                vc.end_pan();
                black_box(vc.viewport());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_zoom_in_out", |b| {
        b.iter_batched(
            bounded_controller,
            |mut vc| {
                for _ in 0..16 {
                    vc.zoom(1.1, Some(Point::new(300.0, 200.0)));
                }
                for _ in 0..16 {
                    vc.zoom(1.0 / 1.1, Some(Point::new(900.0, 500.0)));
                }
                black_box(vc.viewport());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fit_to_content", |b| {
        let content = BoundingBox::new(100.0, 200.0, 2_000.0, 1_500.0);
        b.iter_batched(
            bounded_controller,
            |mut vc| {
                vc.fit_to_content(black_box(&content), 0.1);
                black_box(vc.visible_bounds());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
