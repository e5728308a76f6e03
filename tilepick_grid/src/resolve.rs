// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping pointer positions to grid cells.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size, Vec2};

use crate::layout::GridSpec;

/// Offset of a cell label from the cell's top-left corner, in screen pixels.
pub const LABEL_OFFSET: Vec2 = Vec2::new(5.0, -10.0);

/// A grid cell, addressed by column and row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Zero-based column index.
    pub column: u32,
    /// Zero-based row index.
    pub row: u32,
}

impl Cell {
    /// Creates a cell address.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", self.column, self.row)
    }
}

/// Resolves `cursor` to the grid cell under it.
///
/// The cell pitch is derived from the *drawn* image size (`drawn / columns`
/// per axis), so it follows the zoom. Each index is
/// `round((cursor - origin) / pitch - 0.5)` with ties rounded towards
/// positive infinity. With that tie rule every cell owns its leading edge,
/// the first column's included.
///
/// Returns `None` outside `0..columns` / `0..rows`, and for degenerate grids.
#[must_use]
pub fn resolve_cell(cursor: Point, origin: Point, drawn: Size, grid: &GridSpec) -> Option<Cell> {
    if grid.is_degenerate() {
        return None;
    }
    let column = axis_index(cursor.x - origin.x, drawn.width, grid.columns)?;
    let row = axis_index(cursor.y - origin.y, drawn.height, grid.rows)?;
    Some(Cell { column, row })
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the index is checked to lie in 0..count before the cast"
)]
fn axis_index(distance: f64, drawn: f64, count: u32) -> Option<u32> {
    let pitch = drawn / f64::from(count);
    let index = round_half_up(distance / pitch - 0.5);
    // NaN (zero-sized drawing) fails both comparisons and yields `None`.
    if index >= 0.0 && index < f64::from(count) {
        Some(index as u32)
    } else {
        None
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Screen-space rectangle of `cell` at the drawn pitch.
#[must_use]
pub fn cell_rect(cell: Cell, origin: Point, drawn: Size, grid: &GridSpec) -> Rect {
    let pitch = Size::new(
        drawn.width / f64::from(grid.columns),
        drawn.height / f64::from(grid.rows),
    );
    let x = origin.x + f64::from(cell.column) * pitch.width;
    let y = origin.y + f64::from(cell.row) * pitch.height;
    Rect::from_origin_size((x, y), pitch)
}

/// Hover feedback for the cell under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellHighlight {
    /// The hovered cell.
    pub cell: Cell,
    /// Outline of the cell in screen space.
    pub rect: Rect,
    /// Where to put the cell's label (its [`Display`](fmt::Display) text).
    pub label_anchor: Point,
}

impl CellHighlight {
    /// Resolves the hovered cell and its feedback geometry, if any.
    #[must_use]
    pub fn at(cursor: Point, origin: Point, drawn: Size, grid: &GridSpec) -> Option<Self> {
        let cell = resolve_cell(cursor, origin, drawn, grid)?;
        let rect = cell_rect(cell, origin, drawn, grid);
        Some(Self {
            cell,
            rect,
            label_anchor: rect.origin() + LABEL_OFFSET,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::{Point, Rect, Size};

    use super::{Cell, CellHighlight, cell_rect, resolve_cell};
    use crate::layout::GridSpec;

    fn grid_4x3() -> GridSpec {
        GridSpec::new(4, 3, 100.0, 100.0)
    }

    #[test]
    fn resolves_with_half_cell_bias() {
        let drawn = Size::new(400.0, 300.0);
        // round(1.49) = 1, round(0.99) = 1
        assert_eq!(
            resolve_cell(Point::new(199.0, 149.0), Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(1, 1))
        );
        // round(0.01) = 0, round(-0.49) = 0
        assert_eq!(
            resolve_cell(Point::new(51.0, 1.0), Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(0, 0))
        );
        // round(1.99) = 2
        assert_eq!(
            resolve_cell(Point::new(249.0, 10.0), Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(2, 0))
        );
    }

    #[test]
    fn cell_edges_belong_to_the_following_cell() {
        let drawn = Size::new(400.0, 300.0);
        // round(0.5) = 1
        assert_eq!(
            resolve_cell(Point::new(100.0, 10.0), Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(1, 0))
        );
        // round(2.5) = 3
        assert_eq!(
            resolve_cell(Point::new(300.0, 10.0), Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(3, 0))
        );
        // round(-0.5) = 0: the image origin is inside the first cell.
        assert_eq!(
            resolve_cell(Point::ZERO, Point::ZERO, drawn, &grid_4x3()),
            Some(Cell::new(0, 0))
        );
        // The far edge is outside: round(3.5) = 4.
        assert_eq!(
            resolve_cell(Point::new(400.0, 10.0), Point::ZERO, drawn, &grid_4x3()),
            None
        );
    }

    #[test]
    fn outside_points_resolve_to_none() {
        let drawn = Size::new(400.0, 300.0);
        assert_eq!(
            resolve_cell(Point::new(-5.0, 50.0), Point::ZERO, drawn, &grid_4x3()),
            None
        );
        assert_eq!(
            resolve_cell(Point::new(50.0, 351.0), Point::ZERO, drawn, &grid_4x3()),
            None
        );
        assert_eq!(
            resolve_cell(Point::new(455.0, 10.0), Point::ZERO, drawn, &grid_4x3()),
            None
        );
    }

    #[test]
    fn degenerate_grid_never_resolves() {
        let drawn = Size::new(400.0, 300.0);
        for grid in [
            GridSpec::new(0, 3, 16.0, 16.0),
            GridSpec::new(3, 0, 16.0, 16.0),
        ] {
            assert_eq!(resolve_cell(Point::ZERO, Point::ZERO, drawn, &grid), None);
        }
    }

    #[test]
    fn zero_sized_drawing_never_resolves() {
        assert_eq!(
            resolve_cell(Point::ZERO, Point::ZERO, Size::ZERO, &grid_4x3()),
            None
        );
    }

    #[test]
    fn resolution_follows_drawn_size_and_origin() {
        // Same grid drawn at half size with a shifted origin.
        let origin = Point::new(30.0, 40.0);
        let drawn = Size::new(200.0, 150.0);
        let cursor = Point::new(30.0 + 99.5, 40.0 + 74.5);
        assert_eq!(
            resolve_cell(cursor, origin, drawn, &grid_4x3()),
            Some(Cell::new(1, 1))
        );
    }

    #[test]
    fn highlight_rect_and_label() {
        let drawn = Size::new(400.0, 300.0);
        let origin = Point::new(10.0, 20.0);
        let grid = grid_4x3();
        let hl = CellHighlight::at(Point::new(260.0, 180.0), origin, drawn, &grid).unwrap();
        assert_eq!(hl.cell, Cell::new(2, 1));
        assert_eq!(hl.rect, Rect::new(210.0, 120.0, 310.0, 220.0));
        assert_eq!(hl.label_anchor, Point::new(215.0, 110.0));
        assert_eq!(hl.cell.to_string(), "x: 2 y: 1");

        assert_eq!(CellHighlight::at(Point::ZERO, origin, drawn, &grid), None);
    }

    #[test]
    fn cell_rect_uses_drawn_pitch() {
        let drawn = Size::new(400.0, 300.0);
        let rect = cell_rect(Cell::new(3, 2), Point::ZERO, drawn, &grid_4x3());
        assert_eq!(rect, Rect::new(300.0, 200.0, 400.0, 300.0));
    }
}
