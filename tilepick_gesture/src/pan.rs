// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture helper: turn a pointer drag into viewport offsets.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`PanController::begin_pan`] with the button, the
//!    pointer position and the viewport's current offset. Only the pan button
//!    (middle by default) starts a gesture; you get a [`PanToken`] back.
//! 2) On each move event, call [`PanController::continue_pan`] and store the
//!    returned offset. Offsets are always computed against the baseline
//!    captured at begin time, so repeated moves never compound.
//! 3) On pointer up, release the gesture with [`PanController::end_pan`]. If
//!    the pointer leaves the tracked region, call [`PanController::cancel`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use tilepick_gesture::PointerButton;
//! use tilepick_gesture::pan::PanController;
//!
//! let mut pan = PanController::default();
//!
//! let token = pan
//!     .begin_pan(PointerButton::Middle, Point::new(0.0, 0.0), Vec2::new(100.0, 100.0))
//!     .unwrap();
//!
//! assert_eq!(pan.continue_pan(Point::new(10.0, 5.0)), Some(Vec2::new(110.0, 105.0)));
//! assert_eq!(pan.continue_pan(Point::new(20.0, 5.0)), Some(Vec2::new(120.0, 105.0)));
//!
//! assert!(pan.end_pan(token));
//! assert!(!pan.is_panning());
//! ```

use kurbo::{Point, Vec2};

use crate::PointerButton;

/// Offset for a pointer at `current` in a drag that began at `start` with
/// the viewport at `base_offset`.
#[must_use]
pub fn continue_pan(current: Point, start: Point, base_offset: Vec2) -> Vec2 {
    base_offset + (current - start)
}

/// Capability for one active pan gesture.
///
/// Returned by [`PanController::begin_pan`] and consumed by
/// [`PanController::end_pan`]. A token whose gesture has already been
/// replaced or cancelled is stale; ending it does nothing.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pan gesture must be released with `PanController::end_pan`"]
pub struct PanToken {
    id: u64,
}

impl PanToken {
    /// Identifier of the gesture this token belongs to.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// State captured when a pan gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Pointer position at begin time.
    pub start: Point,
    /// Viewport offset at begin time.
    pub base_offset: Vec2,
    id: u64,
}

/// Tracks at most one pan gesture for a viewport.
#[derive(Clone, Debug)]
pub struct PanController {
    button: PointerButton,
    active: Option<PanGesture>,
    next_id: u64,
}

impl Default for PanController {
    fn default() -> Self {
        Self::new(PointerButton::Middle)
    }
}

impl PanController {
    /// Creates a controller that starts pans on `button`.
    pub fn new(button: PointerButton) -> Self {
        Self {
            button,
            active: None,
            next_id: 0,
        }
    }

    /// The button that starts a pan.
    pub fn button(&self) -> PointerButton {
        self.button
    }

    /// Starts a pan gesture if `button` is the pan button.
    ///
    /// Any gesture still active is ended first, which makes its token stale.
    /// Offsets are not touched; `base_offset` is only recorded.
    pub fn begin_pan(
        &mut self,
        button: PointerButton,
        start: Point,
        base_offset: Vec2,
    ) -> Option<PanToken> {
        if button != self.button {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.active = Some(PanGesture {
            start,
            base_offset,
            id,
        });
        Some(PanToken { id })
    }

    /// Returns the offset for the pointer at `current`, or `None` when no
    /// gesture is active.
    pub fn continue_pan(&self, current: Point) -> Option<Vec2> {
        self.active
            .map(|g| continue_pan(current, g.start, g.base_offset))
    }

    /// Ends the gesture owned by `token`.
    ///
    /// Returns `true` if the gesture was active; a stale token is a no-op.
    pub fn end_pan(&mut self, token: PanToken) -> bool {
        match self.active {
            Some(g) if g.id == token.id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Ends the active gesture, if any, without needing its token.
    ///
    /// Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Returns the active gesture, if any.
    pub fn gesture(&self) -> Option<&PanGesture> {
        self.active.as_ref()
    }

    /// Returns `true` while a pan gesture is active.
    pub fn is_panning(&self) -> bool {
        self.active.is_some()
    }
}
