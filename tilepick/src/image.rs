// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::ImageLoadError;

/// Identifier for an externally owned sprite-sheet image.
///
/// This is a small, opaque handle; the picker never sees pixels, only the
/// natural size reported once the host's loader finishes.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Load state of the picker's current image.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImageState {
    /// No image selected.
    #[default]
    Absent,
    /// Selected, but the loader has not reported dimensions yet.
    Loading(ImageId),
    /// Loaded with its natural pixel size.
    Ready {
        /// Image handle.
        id: ImageId,
        /// Natural size in image pixels.
        size: Size,
    },
    /// The loader gave up on this image.
    Failed {
        /// Image handle.
        id: ImageId,
        /// Why loading failed.
        error: ImageLoadError,
    },
}

impl ImageState {
    /// Handle of the selected image, whatever its load state.
    #[must_use]
    pub fn id(&self) -> Option<ImageId> {
        match self {
            Self::Absent => None,
            Self::Loading(id) | Self::Ready { id, .. } | Self::Failed { id, .. } => Some(*id),
        }
    }

    /// Natural size, only once the image is ready.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        match self {
            Self::Ready { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Returns `true` once the image can be drawn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
