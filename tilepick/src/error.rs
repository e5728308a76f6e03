// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use tilepick_grid::InvalidGrid;
use tilepick_view::{InvalidZoom, InvalidZoomStep};

/// Why an image never became usable by the picker.
///
/// The picker does not retry; it falls back to its "no image" state and the
/// host decides whether to load again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageLoadError {
    /// The external loader failed to decode or fetch the image.
    #[error("image could not be loaded: {0}")]
    Decode(String),

    /// The image loaded but has no pixels to show.
    #[error("image has no pixels: {width}x{height}")]
    EmptyImage {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
}

/// Errors surfaced by the picker's fallible operations.
#[derive(Error, Debug)]
pub enum PickerError {
    /// See [`ImageLoadError`].
    #[error(transparent)]
    ImageLoad(#[from] ImageLoadError),

    /// A zoom value was zero, negative or not finite.
    #[error(transparent)]
    InvalidZoom(#[from] InvalidZoom),

    /// A zoom step was outside `(0, 1)`.
    #[error(transparent)]
    InvalidZoomStep(#[from] InvalidZoomStep),

    /// A grid has non-positive cells or negative padding.
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGrid),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
