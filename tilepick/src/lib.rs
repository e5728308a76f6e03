// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilepick: a headless sprite-sheet picker for tile-based level editors.
//!
//! A picker shows one sprite sheet inside a fixed-size viewport. The user
//! zooms with the wheel (around the cursor), pans with a middle-button drag,
//! can overlay the sheet's grid, and gets the cell under the pointer for
//! hover and pick feedback.
//!
//! [`TilePicker`] ties the pieces together:
//! - [`tilepick_view`] for the pan/zoom transform and auto-fit zoom,
//! - [`tilepick_gesture`] for the pan gesture,
//! - [`tilepick_grid`] for overlay geometry and cell resolution.
//!
//! The host keeps ownership of everything outside the viewport: it loads
//! images and reports their size, normalizes pointer events into
//! [`PointerEvent`]s, stores the tileset's [`GridSpec`] and [`FilterSet`],
//! and implements [`PickerRenderer`] to actually draw.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tilepick::{Cell, FilterSet, GridSpec, ImageId, PointerEvent, TilePicker};
//!
//! let grid = GridSpec::new(4, 2, 32.0, 32.0);
//! let mut picker = TilePicker::new(Size::new(128.0, 64.0));
//!
//! picker.set_image(Some(ImageId(7)));
//! picker.image_loaded(ImageId(7), Size::new(128.0, 64.0)).unwrap();
//!
//! // The first frame fits the image to the viewport.
//! let frame = picker.frame(&grid, FilterSet::PIXELATED).unwrap();
//! assert_eq!(frame.placement.drawn_size, Size::new(128.0, 64.0));
//!
//! picker.handle_event(PointerEvent::Move { position: Point::new(40.0, 40.0) });
//! assert_eq!(picker.hovered_cell(&grid), Some(Cell::new(1, 1)));
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (image lifecycle at `debug`, pan and
//! zoom updates at `trace`, load failures at `warn`) and never installs a
//! subscriber.

mod config;
mod error;
mod event;
mod filter;
mod image;
mod picker;
mod render;

pub use config::{PickerConfig, TilesetConfig};
pub use error::{ImageLoadError, PickerError, Result};
pub use event::PointerEvent;
pub use filter::{Filter, FilterSet};
pub use image::{ImageId, ImageState};
pub use picker::TilePicker;
pub use render::{Frame, PickerRenderer};

pub use tilepick_gesture::PointerButton;
pub use tilepick_grid::{Cell, CellHighlight, GridOffset, GridOverlay, GridSpec, InvalidGrid};
pub use tilepick_view::{ImagePlacement, ViewportState, Zoom, ZoomDirection};
