// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Size, Vec2};

/// Padding baked around every cell of a sprite sheet, in image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GridOffset {
    /// Padding above each cell.
    pub top: f64,
    /// Padding below each cell.
    pub bottom: f64,
    /// Padding left of each cell.
    pub left: f64,
    /// Padding right of each cell.
    pub right: f64,
}

impl GridOffset {
    /// No padding on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    /// Total horizontal and vertical padding per cell.
    #[must_use]
    pub fn total(&self) -> Vec2 {
        Vec2::new(self.left + self.right, self.top + self.bottom)
    }

    /// Returns `true` if no side has padding.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Grid laid over a sprite sheet, in image pixels.
///
/// The grid is allowed to extend past the image: nothing checks that
/// `columns * (cell_width + left + right)` fits inside the image width.
///
/// A grid with zero columns or zero rows is *degenerate*. It still draws
/// its single boundary line on each axis but never resolves a cell. This is
/// also the [`Default`], matching a tileset whose grid has not been set up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GridSpec {
    /// Number of cell columns.
    pub columns: u32,
    /// Number of cell rows.
    pub rows: u32,
    /// Width of a cell, excluding padding.
    pub cell_width: f64,
    /// Height of a cell, excluding padding.
    pub cell_height: f64,
    /// Per-cell padding.
    pub offset: GridOffset,
}

impl GridSpec {
    /// Creates an unpadded grid.
    #[must_use]
    pub fn new(columns: u32, rows: u32, cell_width: f64, cell_height: f64) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            offset: GridOffset::ZERO,
        }
    }

    /// Returns a copy of this grid with the given padding.
    #[must_use]
    pub fn with_offset(mut self, offset: GridOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Size of a cell without padding.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }

    /// Distance between consecutive cell boundaries, padding included.
    #[must_use]
    pub fn pitch(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height) + self.offset.total()
    }

    /// Returns `true` when the grid has padding to visualize.
    #[must_use]
    pub fn has_gutter(&self) -> bool {
        !self.offset.is_zero()
    }

    /// Returns `true` for a grid with no columns or no rows.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Checks the measurements of this grid.
    ///
    /// Cells must have a finite, positive size and padding must be finite
    /// and non-negative. A degenerate grid may keep zero cell sizes, so the
    /// [`Default`] grid passes.
    pub fn validate(&self) -> Result<(), InvalidGrid> {
        let cell_ok = |v: f64| {
            if self.is_degenerate() {
                v.is_finite() && v >= 0.0
            } else {
                v.is_finite() && v > 0.0
            }
        };
        if !cell_ok(self.cell_width) || !cell_ok(self.cell_height) {
            return Err(InvalidGrid::CellSize(self.cell_size()));
        }
        let GridOffset {
            top,
            bottom,
            left,
            right,
        } = self.offset;
        if [top, bottom, left, right]
            .iter()
            .any(|v| !(v.is_finite() && *v >= 0.0))
        {
            return Err(InvalidGrid::Offset(self.offset));
        }
        Ok(())
    }
}

/// Error returned by [`GridSpec::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidGrid {
    /// A cell dimension is not finite, or not positive on a grid with cells.
    CellSize(Size),
    /// A padding side is negative or not finite.
    Offset(GridOffset),
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellSize(size) => write!(
                f,
                "grid cells must have a positive size, got {}x{}",
                size.width, size.height
            ),
            Self::Offset(offset) => write!(
                f,
                "grid padding must be non-negative, got top {} bottom {} left {} right {}",
                offset.top, offset.bottom, offset.left, offset.right
            ),
        }
    }
}

impl core::error::Error for InvalidGrid {}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{GridOffset, GridSpec, InvalidGrid};

    #[test]
    fn pitch_includes_padding() {
        let grid = GridSpec::new(8, 4, 16.0, 24.0).with_offset(GridOffset {
            top: 1.0,
            bottom: 3.0,
            left: 2.0,
            right: 0.0,
        });
        assert_eq!(grid.pitch(), Vec2::new(18.0, 28.0));
        assert!(grid.has_gutter());
        assert_eq!(grid.cell_count(), 32);
    }

    #[test]
    fn default_grid_is_degenerate() {
        let grid = GridSpec::default();
        assert!(grid.is_degenerate());
        assert!(!grid.has_gutter());
        assert_eq!(grid.cell_count(), 0);

        assert!(GridSpec::new(0, 3, 16.0, 16.0).is_degenerate());
        assert!(GridSpec::new(3, 0, 16.0, 16.0).is_degenerate());
        assert!(!GridSpec::new(1, 1, 16.0, 16.0).is_degenerate());
    }

    #[test]
    fn validate_accepts_sheets_and_the_empty_grid() {
        assert_eq!(GridSpec::default().validate(), Ok(()));
        let padded = GridSpec::new(2, 2, 16.0, 16.0).with_offset(GridOffset {
            left: 1.0,
            ..GridOffset::ZERO
        });
        assert_eq!(padded.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_cells_and_padding() {
        assert_eq!(
            GridSpec::new(2, 2, -16.0, 16.0).validate(),
            Err(InvalidGrid::CellSize(Size::new(-16.0, 16.0)))
        );
        assert!(GridSpec::new(2, 2, 16.0, 0.0).validate().is_err());
        assert!(GridSpec::new(0, 0, f64::NAN, 0.0).validate().is_err());

        let offset = GridOffset {
            left: -3.0,
            ..GridOffset::ZERO
        };
        let negative = GridSpec::new(2, 2, 16.0, 16.0).with_offset(offset);
        assert_eq!(negative.validate(), Err(InvalidGrid::Offset(offset)));

        let infinite = GridSpec::default().with_offset(GridOffset {
            top: f64::INFINITY,
            ..GridOffset::ZERO
        });
        assert!(infinite.validate().is_err());
    }
}
