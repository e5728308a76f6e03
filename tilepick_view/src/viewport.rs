// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::transform::{ImagePlacement, initial_zoom};
use crate::zoom::{InvalidZoom, Zoom, ZoomController, ZoomDirection, ZoomUpdate};

/// Pan/zoom state of one picker viewport.
///
/// `ViewportState` is owned by the hosting view and mutated explicitly by
/// controller calls. It never triggers drawing itself: callers decide when a
/// state change warrants a new frame.
///
/// - Zoom starts [`Zoom::Unset`] and is derived lazily by [`fit_image`].
/// - The pan offset is unconstrained; the image may be dragged fully off screen.
///
/// [`fit_image`]: ViewportState::fit_image
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    zoom: Zoom,
    offset: Vec2,
    viewport_size: Size,
}

impl ViewportState {
    /// Creates a fresh state for a viewport of the given size.
    #[must_use]
    pub fn new(viewport_size: Size) -> Self {
        Self {
            zoom: Zoom::Unset,
            offset: Vec2::ZERO,
            viewport_size,
        }
    }

    /// Returns the current zoom.
    #[must_use]
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Sets an explicit zoom value.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), InvalidZoom> {
        self.zoom = Zoom::new(zoom)?;
        Ok(())
    }

    /// Returns the accumulated pan offset in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Replaces the pan offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Returns the viewport size in screen pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Resizes the viewport. Zoom and offset are kept.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Returns to the initial state: no offset and an unset zoom.
    ///
    /// The next [`fit_image`](Self::fit_image) recomputes the fit zoom.
    pub fn reset(&mut self) {
        self.zoom = Zoom::Unset;
        self.offset = Vec2::ZERO;
    }

    /// Derives the fit zoom for `image` if the zoom is still unset.
    ///
    /// Returns `true` when the zoom was computed by this call. When the fit
    /// zoom cannot be derived (empty image, zero-sized viewport) the zoom
    /// stays unset.
    pub fn fit_image(&mut self, image: Size) -> bool {
        if !self.zoom.is_unset() {
            return false;
        }
        match initial_zoom(image, self.viewport_size) {
            Some(zoom) => {
                self.zoom = Zoom::Value(zoom);
                true
            }
            None => false,
        }
    }

    /// Returns where `image` is drawn, or `None` while the zoom is unset.
    #[must_use]
    pub fn placement(&self, image: Size) -> Option<ImagePlacement> {
        let zoom = self.zoom.value()?;
        Some(ImagePlacement::new(
            image,
            zoom,
            self.offset,
            self.viewport_size,
        ))
    }

    /// Zooms one step around `cursor` using `controller`.
    ///
    /// Returns the applied update, or `None` when nothing changed because the
    /// zoom is unset or there is no image.
    pub fn zoom_at(
        &mut self,
        controller: &ZoomController,
        cursor: Point,
        direction: ZoomDirection,
        image: Option<Size>,
    ) -> Option<ZoomUpdate> {
        let update = controller.zoom_at(
            cursor,
            self.zoom,
            self.offset,
            direction,
            self.viewport_size,
            image,
        )?;
        self.zoom = Zoom::Value(update.zoom);
        self.offset = update.offset;
        Some(update)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            viewport_size: self.viewport_size,
            zoom: self.zoom,
            offset: self.offset,
        }
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Viewport size in screen pixels.
    pub viewport_size: Size,
    /// Current zoom.
    pub zoom: Zoom,
    /// Current pan offset.
    pub offset: Vec2,
}
