// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML-backed configuration for the picker and for tileset descriptions.

use serde::{Deserialize, Serialize};

use tilepick_gesture::PointerButton;
use tilepick_grid::GridSpec;
use tilepick_view::{DEFAULT_ZOOM_STEP, ZoomController};

use crate::error::Result;
use crate::filter::{Filter, FilterSet};

/// Behavior of one picker viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Multiplicative zoom step per wheel notch, in `(0, 1)`.
    pub zoom_step: f64,
    /// Whether the grid overlay starts visible.
    pub show_grid: bool,
    /// Button that pans the viewport.
    pub pan_button: PointerButton,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            show_grid: false,
            pan_button: PointerButton::Middle,
        }
    }
}

impl PickerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.zoom_controller()?;
        Ok(config)
    }

    /// Builds the zoom controller for the configured step.
    pub fn zoom_controller(&self) -> Result<ZoomController> {
        Ok(ZoomController::with_step(self.zoom_step)?)
    }
}

/// Grid and display filters of one tileset, as stored by the editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TilesetConfig {
    /// How the sheet is cut into cells.
    pub grid: GridSpec,
    /// Display filters, by name (`["pixelated"]`).
    pub filters: Vec<Filter>,
}

impl TilesetConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.grid.validate()?;
        Ok(config)
    }

    /// The filters as a flag set.
    #[must_use]
    pub fn filter_set(&self) -> FilterSet {
        self.filters.iter().copied().collect()
    }
}
