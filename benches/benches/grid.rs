// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use tilepick_grid::{CellHighlight, GridOffset, GridOverlay, GridSpec, resolve_cell};

fn sheet(columns: u32, rows: u32, padded: bool) -> GridSpec {
    let grid = GridSpec::new(columns, rows, 16.0, 16.0);
    if padded {
        grid.with_offset(GridOffset {
            left: 1.0,
            top: 1.0,
            right: 1.0,
            bottom: 1.0,
        })
    } else {
        grid
    }
}

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilepick_grid/overlay");

    for &(columns, rows) in &[(16_u32, 16_u32), (64, 64), (256, 128)] {
        for padded in [false, true] {
            let grid = sheet(columns, rows, padded);
            let pitch = grid.pitch();
            let drawn = Size::new(
                f64::from(columns) * pitch.x / 2.0,
                f64::from(rows) * pitch.y / 2.0,
            );
            group.bench_function(
                format!("build(c={columns},r={rows},padded={padded})"),
                |b| {
                    b.iter(|| {
                        black_box(GridOverlay::new(
                            black_box(&grid),
                            Point::new(12.0, -4.0),
                            2.0,
                            drawn,
                        ))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilepick_grid/resolve");

    let grid = sheet(64, 64, true);
    let drawn = Size::new(640.0, 640.0);
    let origin = Point::new(-20.0, 35.0);
    // A diagonal sweep, partly outside the image.
    let cursors: Vec<Point> = (0..1_024)
        .map(|i| {
            let t = f64::from(i);
            Point::new(-40.0 + t * 0.7, 10.0 + t * 0.65)
        })
        .collect();

    group.bench_function("resolve_cell(sweep=1024)", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for &cursor in &cursors {
                if resolve_cell(black_box(cursor), origin, drawn, &grid).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.bench_function("highlight(sweep=1024)", |b| {
        b.iter(|| {
            for &cursor in &cursors {
                black_box(CellHighlight::at(black_box(cursor), origin, drawn, &grid));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_overlay, bench_resolve);
criterion_main!(benches);
