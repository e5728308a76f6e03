// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::ImageSampler;

use tilepick_grid::{CellHighlight, GridOverlay};
use tilepick_view::ImagePlacement;

use crate::image::ImageId;

/// Drawing interface implemented by the host's renderer.
///
/// The picker never touches a surface itself. Each frame it clears, draws
/// the image (when one is ready) and then hands over overlay geometry in
/// screen space. Stroke colors, widths and label fonts are the renderer's
/// choice.
pub trait PickerRenderer {
    /// Clear the whole viewport.
    fn clear(&mut self);

    /// Draw `image` stretched over `dst`, sampled with `sampler`.
    fn draw_image(&mut self, image: ImageId, dst: Rect, sampler: ImageSampler);

    /// Draw the grid overlay (when visible) and the hovered cell (when any).
    ///
    /// The highlight's label text is the cell's `Display` output.
    fn draw_overlay(&mut self, overlay: Option<&GridOverlay>, highlight: Option<&CellHighlight>);
}

/// Everything needed to draw one picker frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Image to draw.
    pub image: ImageId,
    /// Where the image lands in the viewport.
    pub placement: ImagePlacement,
    /// Sampler derived from the tileset's filters.
    pub sampler: ImageSampler,
    /// Grid geometry, when the grid is shown.
    pub overlay: Option<GridOverlay>,
    /// Hovered cell, when the cursor is over one.
    pub highlight: Option<CellHighlight>,
}

impl Frame {
    /// Replays this frame into `renderer`.
    pub fn draw(&self, renderer: &mut impl PickerRenderer) {
        renderer.clear();
        renderer.draw_image(self.image, self.placement.drawn_rect(), self.sampler);
        renderer.draw_overlay(self.overlay.as_ref(), self.highlight.as_ref());
    }
}
