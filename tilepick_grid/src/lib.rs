// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilepick Grid: sprite-sheet grid overlay geometry and cell hit testing.
//!
//! A sprite sheet is cut into cells by a [`GridSpec`]: a column/row count, a
//! cell size and optional per-cell padding (a "gutter"), all in image pixels.
//! Given where the image is drawn on screen, this crate produces:
//!
//! - [`GridOverlay`]: boundary lines at the padded pitch, plus one inset
//!   rectangle per cell when padding is present, so padding can be told
//!   apart from cell boundaries.
//! - [`resolve_cell`]: the cell under a pointer position, or `None`.
//! - [`CellHighlight`]: the hovered cell's outline and label anchor.
//!
//! All output is plain `kurbo` geometry in screen space. The crate never
//! draws and never mutates the grid it is given.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tilepick_grid::{Cell, GridOffset, GridOverlay, GridSpec, resolve_cell};
//!
//! let grid = GridSpec::new(4, 3, 16.0, 16.0).with_offset(GridOffset {
//!     left: 2.0,
//!     top: 2.0,
//!     ..GridOffset::ZERO
//! });
//!
//! // The image is drawn at the viewport origin, at zoom 1.
//! let origin = Point::ZERO;
//! let drawn = Size::new(72.0, 54.0);
//!
//! let overlay = GridOverlay::new(&grid, origin, 1.0, drawn);
//! assert_eq!(overlay.vertical.len(), 5);
//! assert_eq!(overlay.gutters.len(), 12);
//!
//! let hovered = resolve_cell(Point::new(20.0, 20.0), origin, drawn, &grid);
//! assert_eq!(hovered, Some(Cell::new(1, 1)));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GridSpec`] and
//!   [`GridOffset`].
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod layout;
pub mod overlay;
pub mod resolve;

pub use layout::{GridOffset, GridSpec, InvalidGrid};
pub use overlay::GridOverlay;
pub use resolve::{Cell, CellHighlight, cell_rect, resolve_cell};
