// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilepick Gesture: pointer gesture state for the sprite-sheet picker.
//!
//! This crate provides small state machines for interactions that span
//! several pointer events:
//!
//! - [`pan`]: Track a middle-button drag and turn it into viewport offsets
//!
//! The state managers accept pre-normalized input (viewport-relative
//! positions and a [`PointerButton`]) and never register listeners or touch
//! a drawing surface. Routing raw device events to them, and guaranteeing
//! that at most one pan gesture is alive per viewport, is the host's job.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`PointerButton`], so a
//!   pan button can be chosen from configuration.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod pan;

/// A pointer button, as reported by the host's event layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the wheel button.
    Middle,
    /// Usually the right button.
    Secondary,
    /// Any other button, by its platform index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM-style `MouseEvent.button` index to a button.
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}
