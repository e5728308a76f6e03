// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use tilepick_gesture::PointerButton;

/// A pointer event, already normalized by the host.
///
/// Positions are in screen pixels relative to the viewport's top-left
/// corner. Converting raw device coordinates is the host's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Wheel scrolled over the viewport.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll delta; positive scrolls down.
        delta_y: f64,
    },
    /// A button was pressed.
    Down {
        /// Pointer position.
        position: Point,
        /// Pressed button.
        button: PointerButton,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        position: Point,
    },
    /// A button was released.
    Up {
        /// Pointer position.
        position: Point,
        /// Released button.
        button: PointerButton,
    },
    /// The pointer left the tracked region.
    Leave,
}

impl PointerEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Wheel { position, .. }
            | Self::Down { position, .. }
            | Self::Move { position }
            | Self::Up { position, .. } => Some(*position),
            Self::Leave => None,
        }
    }
}
