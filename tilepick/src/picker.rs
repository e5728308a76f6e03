// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use tracing::{debug, trace, warn};

use tilepick_gesture::pan::{PanController, PanToken};
use tilepick_grid::{Cell, CellHighlight, GridOverlay, GridSpec, resolve_cell};
use tilepick_view::{ViewportState, ZoomController, ZoomDirection};

use crate::config::PickerConfig;
use crate::error::{ImageLoadError, Result};
use crate::event::PointerEvent;
use crate::filter::FilterSet;
use crate::image::{ImageId, ImageState};
use crate::render::{Frame, PickerRenderer};

/// One mounted sprite-sheet picker viewport.
///
/// `TilePicker` owns the per-viewport state (zoom, pan offset, pan gesture,
/// cursor and image load state) and turns pointer events into updates of
/// it. The grid and filters belong to the caller and are passed in fresh
/// for every frame.
///
/// Nothing is redrawn implicitly: [`handle_event`](Self::handle_event)
/// reports whether state changed and the host decides when to call
/// [`render`](Self::render) or [`frame`](Self::frame).
#[derive(Debug)]
pub struct TilePicker {
    viewport: ViewportState,
    zoom: ZoomController,
    pan: PanController,
    pan_token: Option<PanToken>,
    image: ImageState,
    cursor: Option<Point>,
    show_grid: bool,
}

impl TilePicker {
    /// Creates a picker with the default configuration.
    #[must_use]
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport: ViewportState::new(viewport_size),
            zoom: ZoomController::default(),
            pan: PanController::default(),
            pan_token: None,
            image: ImageState::Absent,
            cursor: None,
            show_grid: PickerConfig::default().show_grid,
        }
    }

    /// Creates a picker from `config`.
    pub fn with_config(viewport_size: Size, config: &PickerConfig) -> Result<Self> {
        Ok(Self {
            zoom: config.zoom_controller()?,
            pan: PanController::new(config.pan_button),
            show_grid: config.show_grid,
            ..Self::new(viewport_size)
        })
    }

    /// Current pan/zoom state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Load state of the current image.
    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    /// Last known pointer position, in viewport coordinates.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Returns `true` while a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Whether the grid overlay is drawn.
    #[must_use]
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Shows or hides the grid overlay.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    /// Resizes the viewport, keeping zoom and offset.
    pub fn resize(&mut self, size: Size) {
        self.viewport.set_viewport_size(size);
    }

    /// Drops any pan and zoom, so the next frame fits the image again.
    pub fn reset(&mut self) {
        self.end_pan();
        self.viewport.reset();
        debug!("viewport reset");
    }

    /// Selects the image to show, or none.
    ///
    /// Selecting a different image resets the viewport and waits for the
    /// host to report the load result through [`image_loaded`] or
    /// [`image_failed`]. Reselecting the current image changes nothing.
    ///
    /// [`image_loaded`]: Self::image_loaded
    /// [`image_failed`]: Self::image_failed
    pub fn set_image(&mut self, image: Option<ImageId>) {
        if self.image.id() == image {
            return;
        }
        self.reset();
        self.image = match image {
            Some(id) => ImageState::Loading(id),
            None => ImageState::Absent,
        };
        debug!(image = ?image, "image changed");
    }

    /// Records that `id` finished loading with its natural `size`.
    ///
    /// Results for an image that is no longer selected are ignored. An image
    /// without pixels is treated as a failed load and reported back. A repeat
    /// report with the same size changes nothing; a different size refits.
    pub fn image_loaded(
        &mut self,
        id: ImageId,
        size: Size,
    ) -> std::result::Result<(), ImageLoadError> {
        if self.image.id() != Some(id) {
            debug!(image = ?id, "ignoring load result for an image that is no longer selected");
            return Ok(());
        }
        if self.image.size() == Some(size) {
            return Ok(());
        }
        if self.image.is_ready() {
            self.reset();
        }
        let has_pixels = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if !has_pixels {
            let error = ImageLoadError::EmptyImage {
                width: size.width,
                height: size.height,
            };
            self.image_failed(id, error.clone());
            return Err(error);
        }
        self.image = ImageState::Ready { id, size };
        debug!(image = ?id, width = size.width, height = size.height, "image ready");
        Ok(())
    }

    /// Records that loading `id` failed. The picker shows nothing until
    /// another image is selected.
    pub fn image_failed(&mut self, id: ImageId, error: ImageLoadError) {
        if self.image.id() != Some(id) {
            debug!(image = ?id, "ignoring load failure for an image that is no longer selected");
            return;
        }
        warn!(image = ?id, %error, "image failed to load");
        self.image = ImageState::Failed { id, error };
    }

    /// Applies one pointer event.
    ///
    /// Returns `true` when the cursor, zoom or offset changed, so the host
    /// knows a new frame is due.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        let cursor_moved = match event.position() {
            Some(position) => self.cursor.replace(position) != Some(position),
            None => false,
        };
        let view_changed = match event {
            PointerEvent::Wheel { position, delta_y } => {
                self.zoom_at(position, ZoomDirection::from_wheel_delta(delta_y))
            }
            PointerEvent::Down { position, button } => {
                if let Some(token) = self.pan.begin_pan(button, position, self.viewport.offset()) {
                    // Any previous token is stale now; dropping it is enough.
                    self.pan_token = Some(token);
                    trace!(?position, "pan started");
                }
                false
            }
            PointerEvent::Move { position } => match self.pan.continue_pan(position) {
                Some(offset) if offset != self.viewport.offset() => {
                    self.viewport.set_offset(offset);
                    trace!(offset = ?offset, "panned");
                    true
                }
                _ => false,
            },
            PointerEvent::Up { .. } => {
                self.end_pan();
                false
            }
            PointerEvent::Leave => {
                self.pan_token = None;
                if self.pan.cancel() {
                    trace!("pan cancelled");
                }
                false
            }
        };
        cursor_moved || view_changed
    }

    fn zoom_at(&mut self, cursor: Point, direction: ZoomDirection) -> bool {
        match self
            .viewport
            .zoom_at(&self.zoom, cursor, direction, self.image.size())
        {
            Some(update) => {
                trace!(zoom = update.zoom, offset = ?update.offset, "zoomed");
                true
            }
            None => false,
        }
    }

    fn end_pan(&mut self) {
        match self.pan_token.take() {
            Some(token) => {
                if self.pan.end_pan(token) {
                    trace!("pan ended");
                }
            }
            None => trace!("no pan to end"),
        }
    }

    /// Cell under the cursor for `grid`, if any.
    ///
    /// Always `None` until the image is ready and its fit zoom has been
    /// derived by a first [`frame`](Self::frame).
    #[must_use]
    pub fn hovered_cell(&self, grid: &GridSpec) -> Option<Cell> {
        let placement = self.viewport.placement(self.image.size()?)?;
        resolve_cell(self.cursor?, placement.origin, placement.drawn_size, grid)
    }

    /// Computes the frame to draw, or `None` when there is no ready image.
    ///
    /// The first frame after an image becomes ready derives the fit zoom.
    pub fn frame(&mut self, grid: &GridSpec, filters: FilterSet) -> Option<Frame> {
        let ImageState::Ready { id, size } = self.image else {
            return None;
        };
        if self.viewport.fit_image(size) {
            debug!(zoom = ?self.viewport.zoom(), "fitted image to viewport");
        }
        let placement = self.viewport.placement(size)?;
        let (origin, drawn) = (placement.origin, placement.drawn_size);
        let overlay = self
            .show_grid
            .then(|| GridOverlay::new(grid, origin, placement.zoom, drawn));
        let highlight = self
            .cursor
            .and_then(|c| CellHighlight::at(c, origin, drawn, grid));
        Some(Frame {
            image: id,
            placement,
            sampler: filters.sampler(),
            overlay,
            highlight,
        })
    }

    /// Draws the current frame into `renderer`, or just clears it when there
    /// is nothing to show.
    pub fn render(
        &mut self,
        renderer: &mut impl PickerRenderer,
        grid: &GridSpec,
        filters: FilterSet,
    ) {
        match self.frame(grid, filters) {
            Some(frame) => frame.draw(renderer),
            None => renderer.clear(),
        }
    }
}
