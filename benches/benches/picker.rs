// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use tilepick::{FilterSet, GridSpec, ImageId, PointerButton, PointerEvent, TilePicker};
use tilepick_view::{ViewportState, ZoomController, ZoomDirection};

const SHEET: ImageId = ImageId(1);

fn ready_picker(show_grid: bool) -> TilePicker {
    let mut picker = TilePicker::new(Size::new(800.0, 600.0));
    picker.set_image(Some(SHEET));
    picker
        .image_loaded(SHEET, Size::new(1024.0, 1024.0))
        .expect("sheet has pixels");
    picker.set_show_grid(show_grid);
    picker
        .frame(&GridSpec::default(), FilterSet::empty())
        .expect("image is ready");
    picker
}

/// Wheel notches alternating in and out, with the cursor drifting.
fn wheel_events(count: u32) -> Vec<PointerEvent> {
    (0..count)
        .map(|i| PointerEvent::Wheel {
            position: Point::new(100.0 + f64::from(i % 300), 80.0 + f64::from(i % 200)),
            delta_y: if i % 3 == 0 { 100.0 } else { -100.0 },
        })
        .collect()
}

/// One middle-button drag with `moves` intermediate positions.
fn drag_events(moves: u32) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(PointerEvent::Down {
        position: Point::new(400.0, 300.0),
        button: PointerButton::Middle,
    });
    events.extend((0..moves).map(|i| PointerEvent::Move {
        position: Point::new(400.0 + f64::from(i) * 0.5, 300.0 - f64::from(i) * 0.25),
    }));
    events.push(PointerEvent::Up {
        position: Point::ZERO,
        button: PointerButton::Middle,
    });
    events
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilepick_view/zoom");

    let controller = ZoomController::default();
    group.bench_function("zoom_at(steps=256)", |b| {
        b.iter_batched(
            || {
                let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
                viewport.fit_image(Size::new(1024.0, 1024.0));
                viewport.set_offset(Vec2::new(15.0, -30.0));
                viewport
            },
            |mut viewport| {
                for i in 0..256_u32 {
                    let direction = if i % 2 == 0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    };
                    black_box(viewport.zoom_at(
                        &controller,
                        Point::new(f64::from(i), 300.0),
                        direction,
                        Some(Size::new(1024.0, 1024.0)),
                    ));
                }
                viewport
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilepick/events");

    let wheel = wheel_events(512);
    group.bench_function("wheel(n=512)", |b| {
        b.iter_batched(
            || ready_picker(false),
            |mut picker| {
                for &event in &wheel {
                    black_box(picker.handle_event(event));
                }
                picker
            },
            BatchSize::SmallInput,
        );
    });

    let drag = drag_events(1_024);
    group.bench_function("drag(moves=1024)", |b| {
        b.iter_batched(
            || ready_picker(false),
            |mut picker| {
                for &event in &drag {
                    black_box(picker.handle_event(event));
                }
                picker
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilepick/frame");

    let grid = GridSpec::new(64, 64, 16.0, 16.0);
    for show_grid in [false, true] {
        let mut picker = ready_picker(show_grid);
        picker.handle_event(PointerEvent::Move {
            position: Point::new(333.0, 222.0),
        });
        group.bench_function(format!("frame(64x64,show_grid={show_grid})"), |b| {
            b.iter(|| black_box(picker.frame(&grid, FilterSet::PIXELATED)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_zoom, bench_events, bench_frame);
criterion_main!(benches);
