// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the gesture kernels on synthetic pointer streams: grid
//! drag accumulation, pinch scale chaining, and anchored zoom math.
//!
//! These run the per-pointer-event hot path a host would drive at input
//! rate, so regressions here show up as dropped frames during a drag.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tackboard_drag::{DragConfig, DragEngine, GridStep};
use tackboard_pinch::PinchEngine;
use tackboard_pointer::{PointerEvent, PointerId, PointerTracker, PointerType};
use tackboard_view::BoardTransform;

fn mouse(id: u64, x: f64, y: f64) -> PointerEvent<u32> {
    PointerEvent {
        id: PointerId(id),
        pointer_type: PointerType::Mouse,
        position: Point::new(x, y),
        target: 0,
        is_primary: id == 1,
    }
}

fn touch(id: u64, x: f64, y: f64) -> PointerEvent<u32> {
    PointerEvent {
        pointer_type: PointerType::Touch,
        ..mouse(id, x, y)
    }
}

fn bench_grid_drag_stream(c: &mut Criterion) {
    c.bench_function("grid_drag_1000_moves", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::new();
            let mut drag = DragEngine::new(DragConfig {
                grid: Some(GridStep::uniform(10.0)),
                ..DragConfig::default()
            });

            let update = tracker.pointer_down(&mouse(1, 0.0, 0.0)).unwrap();
            drag.pointer_down(&update, None);
            for step in 1..=1000_i32 {
                let x = f64::from(step) * 0.7;
                let y = f64::from(step) * 0.3;
                let update = tracker.pointer_move(&mouse(1, x, y)).unwrap();
                black_box(drag.pointer_move(&update));
            }
        });
    });
}

fn bench_pinch_chain(c: &mut Criterion) {
    c.bench_function("pinch_1000_steps", |b| {
        b.iter(|| {
            let mut tracker = PointerTracker::new();
            let mut pinch = PinchEngine::new();

            pinch.pointer_down(&tracker.pointer_down(&touch(1, 0.0, 0.0)).unwrap());
            pinch.pointer_down(&tracker.pointer_down(&touch(2, 100.0, 0.0)).unwrap());
            for step in 0..1000_i32 {
                // Oscillating separation keeps the scale inside the clamp.
                let x = 100.0 + 50.0 * f64::from(step % 20 - 10) / 10.0;
                let update = tracker.pointer_move(&touch(2, x, 0.0)).unwrap();
                black_box(pinch.pointer_move(&update));
            }
        });
    });
}

fn bench_anchored_zoom(c: &mut Criterion) {
    c.bench_function("zoom_about_1000_steps", |b| {
        b.iter(|| {
            let mut transform = BoardTransform::default();
            let anchor = Point::new(400.0, 300.0);
            for step in 0..1000_i32 {
                let factor = if step % 2 == 0 { 0.04 } else { -0.04 };
                transform = transform.zoom_about(anchor, factor);
            }
            black_box(transform)
        });
    });
}

criterion_group!(
    benches,
    bench_grid_drag_stream,
    bench_pinch_chain,
    bench_anchored_zoom
);
criterion_main!(benches);
