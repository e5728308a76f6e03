// Copyright 2026 the Tilepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{ImageQuality, ImageSampler};
use serde::{Deserialize, Serialize};

/// A display filter a tileset can opt into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Nearest-neighbor sampling, for pixel art.
    Pixelated,
}

impl Filter {
    fn flag(self) -> FilterSet {
        match self {
            Self::Pixelated => FilterSet::PIXELATED,
        }
    }
}

bitflags::bitflags! {
    /// Display filters of a tileset.
    ///
    /// Filters only change how the image is sampled; they never affect
    /// grid geometry or hit testing.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FilterSet: u8 {
        /// Draw with nearest-neighbor sampling.
        const PIXELATED = 0b0000_0001;
    }
}

impl FilterSet {
    /// Turns `filter` on or off. Repeating either is a no-op.
    pub fn toggle_filter(&mut self, filter: Filter, enabled: bool) {
        self.set(filter.flag(), enabled);
    }

    /// Returns `true` if `filter` is on.
    #[must_use]
    pub fn has(self, filter: Filter) -> bool {
        self.contains(filter.flag())
    }

    /// Lists the enabled filters.
    #[must_use]
    pub fn filters(self) -> Vec<Filter> {
        [Filter::Pixelated]
            .into_iter()
            .filter(|f| self.has(*f))
            .collect()
    }

    /// Sampler to draw the tileset image with.
    #[must_use]
    pub fn sampler(self) -> ImageSampler {
        if self.contains(Self::PIXELATED) {
            ImageSampler {
                quality: ImageQuality::Low,
                ..ImageSampler::default()
            }
        } else {
            ImageSampler::default()
        }
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, filter| set | filter.flag())
    }
}
