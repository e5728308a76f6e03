// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between image pixel space and viewport (screen) space.
//!
//! Zoom is expressed as *image pixels per screen pixel*: an image of width
//! `W` is drawn `W / zoom` screen pixels wide. Before any panning the drawn
//! image is centered in the viewport; the pan offset then translates it.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Returns the "fit" zoom for `image` inside `viewport`.
///
/// This is the smallest zoom at which the whole image is visible, so one
/// axis exactly spans the viewport and the other fits inside it. Returns
/// `None` when the result would not be a finite positive zoom, for example
/// for an empty image or a zero-sized viewport.
#[must_use]
pub fn initial_zoom(image: Size, viewport: Size) -> Option<f64> {
    let zoom = (image.width / viewport.width).max(image.height / viewport.height);
    (zoom.is_finite() && zoom > 0.0).then_some(zoom)
}

/// Returns the size of `image` once drawn at `zoom`.
#[must_use]
pub fn drawn_size(image: Size, zoom: f64) -> Size {
    Size::new(image.width / zoom, image.height / zoom)
}

/// Returns the screen-space position of the image's top-left corner.
///
/// `origin = offset + (image / zoom - viewport) / -2`
#[must_use]
pub fn image_origin(image: Size, zoom: f64, offset: Vec2, viewport: Size) -> Point {
    let drawn = drawn_size(image, zoom);
    Point::new(
        offset.x + (drawn.width - viewport.width) / -2.0,
        offset.y + (drawn.height - viewport.height) / -2.0,
    )
}

/// Converts a screen-space point into image pixel coordinates.
#[must_use]
pub fn screen_to_image(point: Point, origin: Point, zoom: f64) -> Point {
    ((point - origin) * zoom).to_point()
}

/// Converts an image pixel coordinate into screen space.
#[must_use]
pub fn image_to_screen(point: Point, origin: Point, zoom: f64) -> Point {
    origin + point.to_vec2() / zoom
}

/// Where the image lands in the viewport for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    /// Screen-space position of the image's top-left corner.
    pub origin: Point,
    /// Zoom used for this placement, in image pixels per screen pixel.
    pub zoom: f64,
    /// Size of the image as drawn on screen.
    pub drawn_size: Size,
}

impl ImagePlacement {
    /// Computes the placement of `image` for the given zoom, offset and viewport.
    #[must_use]
    pub fn new(image: Size, zoom: f64, offset: Vec2, viewport: Size) -> Self {
        Self {
            origin: image_origin(image, zoom, offset, viewport),
            zoom,
            drawn_size: drawn_size(image, zoom),
        }
    }

    /// Screen-space rectangle covered by the drawn image.
    #[must_use]
    pub fn drawn_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.drawn_size)
    }

    /// Converts a screen-space point into image pixel coordinates.
    #[must_use]
    pub fn screen_to_image(&self, point: Point) -> Point {
        screen_to_image(point, self.origin, self.zoom)
    }

    /// Converts an image pixel coordinate into screen space.
    #[must_use]
    pub fn image_to_screen(&self, point: Point) -> Point {
        image_to_screen(point, self.origin, self.zoom)
    }

    /// Image → screen transform, for renderers that draw with an affine.
    #[must_use]
    pub fn image_to_screen_affine(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(1.0 / self.zoom)
    }
}
