// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilepick View: viewport transform and zoom-to-cursor math.
//!
//! This crate provides the headless pan/zoom model behind a sprite-sheet
//! picker. It focuses on:
//! - Placing a bitmap inside a fixed-size viewport (centered, then panned).
//! - Converting points between image pixel space and screen space.
//! - Deriving the initial "fit" zoom once the image size is known.
//! - Stepping the zoom while keeping the pixel under the cursor stationary.
//!
//! It does **not** own an image, a drawing surface or an event loop. Callers
//! are expected to:
//! - Keep one [`ViewportState`] per mounted viewport.
//! - Route wheel events into [`ViewportState::zoom_at`] and pan gestures
//!   into [`ViewportState::set_offset`].
//! - Ask [`ViewportState::placement`] where to draw each frame.
//!
//! Zoom is measured in *image pixels per screen pixel*, so larger values
//! show more of the image.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tilepick_view::{ViewportState, ZoomController, ZoomDirection};
//!
//! let image = Size::new(512.0, 256.0);
//! let mut view = ViewportState::new(Size::new(256.0, 256.0));
//!
//! // First frame with a loaded image: derive the fit zoom.
//! view.fit_image(image);
//! let placement = view.placement(image).unwrap();
//! assert_eq!(placement.drawn_size, Size::new(256.0, 128.0));
//!
//! // Wheel up over a pixel: zoom in around it.
//! let cursor = Point::new(40.0, 100.0);
//! let before = placement.screen_to_image(cursor);
//! view.zoom_at(&ZoomController::default(), cursor, ZoomDirection::In, Some(image));
//! let after = view.placement(image).unwrap().screen_to_image(cursor);
//! assert!((before.x - after.x).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform on both axes; there is no rotation.
//! - No zoom or pan limits are imposed. Hosts that want clamping apply it
//!   on top of the values this crate produces.
//!
//! This crate is `no_std`.

#![no_std]

pub mod transform;
mod viewport;
mod zoom;

pub use transform::ImagePlacement;
pub use viewport::{ViewportDebugInfo, ViewportState};
pub use zoom::{
    DEFAULT_ZOOM_STEP, InvalidZoom, InvalidZoomStep, Zoom, ZoomController, ZoomDirection,
    ZoomUpdate,
};
