// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size, Vec2};

use crate::transform::{drawn_size, image_origin, image_to_screen, screen_to_image};

/// Default multiplicative zoom step applied per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 0.2;

/// Zoom level of a viewport.
///
/// A viewport starts out [`Zoom::Unset`] and only receives a value once the
/// image dimensions are known and the fit zoom can be derived.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Zoom {
    /// Not computed yet; the next frame with a loaded image derives the fit zoom.
    #[default]
    Unset,
    /// Image pixels per screen pixel. Always finite and positive.
    Value(f64),
}

impl Zoom {
    /// Creates a zoom value, rejecting zero, negative and non-finite input.
    pub fn new(value: f64) -> Result<Self, InvalidZoom> {
        if value.is_finite() && value > 0.0 {
            Ok(Self::Value(value))
        } else {
            Err(InvalidZoom(value))
        }
    }

    /// Returns the zoom value, or `None` while unset.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Returns `true` while the zoom still awaits auto-fit.
    #[must_use]
    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// Error returned for a zoom value that is zero, negative or not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidZoom(pub f64);

impl fmt::Display for InvalidZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zoom must be finite and positive, got {}", self.0)
    }
}

impl core::error::Error for InvalidZoom {}

/// Error returned for a zoom step outside the open range `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidZoomStep(pub f64);

impl fmt::Display for InvalidZoomStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zoom step must lie in (0, 1), got {}", self.0)
    }
}

impl core::error::Error for InvalidZoomStep {}

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Show more of the image: zoom grows by `1 + step`.
    Out,
    /// Magnify the image: zoom shrinks by `1 - step`.
    In,
}

impl ZoomDirection {
    /// Maps a vertical wheel delta to a direction.
    ///
    /// Scrolling down (`delta_y > 0`) zooms out; everything else zooms in.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }
}

/// Result of a zoom step: the new zoom and the compensating offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomUpdate {
    /// New zoom value.
    pub zoom: f64,
    /// New pan offset keeping the cursor's image point stationary.
    pub offset: Vec2,
}

/// Discrete zoom-to-cursor controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomController {
    step: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ZoomController {
    /// Creates a controller with a custom step.
    ///
    /// The step must lie strictly between `0` and `1`; `1` or more would make
    /// zooming in produce a non-positive zoom.
    pub fn with_step(step: f64) -> Result<Self, InvalidZoomStep> {
        if step > 0.0 && step < 1.0 {
            Ok(Self { step })
        } else {
            Err(InvalidZoomStep(step))
        }
    }

    /// Returns the configured step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the zoom one step away from `zoom` in `direction`.
    #[must_use]
    pub fn next_zoom(&self, zoom: f64, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::Out => zoom * (1.0 + self.step),
            ZoomDirection::In => zoom * (1.0 - self.step),
        }
    }

    /// Zooms one step around `cursor`, keeping the image point under it fixed.
    ///
    /// Returns `None` while the zoom is unset or when there is no image. A
    /// step that would leave the zoom, the drawn size or the offset
    /// non-finite is refused the same way, so the view stays usable at the
    /// limits of `f64`.
    #[must_use]
    pub fn zoom_at(
        &self,
        cursor: Point,
        zoom: Zoom,
        offset: Vec2,
        direction: ZoomDirection,
        viewport: Size,
        image: Option<Size>,
    ) -> Option<ZoomUpdate> {
        let old_zoom = zoom.value()?;
        let image = image?;
        let new_zoom = self.next_zoom(old_zoom, direction);
        if Zoom::new(new_zoom).is_err() || !drawn_size(image, new_zoom).is_finite() {
            return None;
        }

        let old_origin = image_origin(image, old_zoom, offset, viewport);
        let anchor = screen_to_image(cursor, old_origin, old_zoom);
        let moved_origin = image_origin(image, new_zoom, offset, viewport);
        let drift = cursor - image_to_screen(anchor, moved_origin, new_zoom);
        let offset = offset + drift;
        if !offset.is_finite() {
            return None;
        }

        Some(ZoomUpdate {
            zoom: new_zoom,
            offset,
        })
    }
}
