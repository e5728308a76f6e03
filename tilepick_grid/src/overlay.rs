// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space overlay geometry for a grid.
//!
//! The overlay is drawn in two tiers: boundary lines at the full cell pitch
//! (padding included), and, when the grid has padding, one inset rectangle
//! per cell showing where the sprite itself sits. Both are plain geometry;
//! stroking them is up to the renderer.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Size};

use crate::layout::GridSpec;

/// Grid geometry ready to be stroked, in screen space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridOverlay {
    /// Vertical boundary lines, left to right (`columns + 1` of them).
    pub vertical: Vec<Line>,
    /// Horizontal boundary lines, top to bottom (`rows + 1` of them).
    pub horizontal: Vec<Line>,
    /// Inset cell rectangles in row-major order; empty without padding.
    pub gutters: Vec<Rect>,
}

impl GridOverlay {
    /// Builds the overlay for `grid` over an image drawn at `origin`.
    ///
    /// `drawn` is the image size on screen; lines span it fully on the
    /// cross axis even when the grid itself is larger or smaller than the
    /// image.
    #[must_use]
    pub fn new(grid: &GridSpec, origin: Point, zoom: f64, drawn: Size) -> Self {
        let pitch = grid.pitch();

        let vertical = (0..=grid.columns)
            .map(|col| {
                let x = origin.x + f64::from(col) * pitch.x / zoom;
                Line::new((x, origin.y), (x, origin.y + drawn.height))
            })
            .collect();

        let horizontal = (0..=grid.rows)
            .map(|row| {
                let y = origin.y + f64::from(row) * pitch.y / zoom;
                Line::new((origin.x, y), (origin.x + drawn.width, y))
            })
            .collect();

        let mut gutters = Vec::new();
        if grid.has_gutter() {
            let cell = Size::new(grid.cell_width / zoom, grid.cell_height / zoom);
            gutters.reserve(grid.cell_count());
            for row in 0..grid.rows {
                for col in 0..grid.columns {
                    let x = origin.x + (f64::from(col) * pitch.x + grid.offset.left) / zoom;
                    let y = origin.y + (f64::from(row) * pitch.y + grid.offset.top) / zoom;
                    gutters.push(Rect::from_origin_size((x, y), cell));
                }
            }
        }

        Self {
            vertical,
            horizontal,
            gutters,
        }
    }

    /// Iterates over every boundary line, vertical ones first.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    /// Returns the gutter rectangle for `(column, row)`, if there is one.
    #[must_use]
    pub fn gutter(&self, grid: &GridSpec, column: u32, row: u32) -> Option<Rect> {
        if column >= grid.columns || row >= grid.rows {
            return None;
        }
        let index = row as usize * grid.columns as usize + column as usize;
        self.gutters.get(index).copied()
    }
}
