// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::Point;

/// Linear transform from 2D source coordinates to world positions.
///
/// A source point `(x, y)` lands at
/// `(x / scale - offset_x, y / scale + offset_y, depth)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Source units per world unit.
    pub scale: f64,
    /// Subtracted from the scaled X coordinate.
    pub offset_x: f64,
    /// Added to the scaled Y coordinate.
    pub offset_y: f64,
    /// Z coordinate of every initial position.
    pub depth: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            offset_x: 6.0,
            offset_y: 4.0,
            depth: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the world position of a source coordinate.
    ///
    /// A zero or non-finite `scale` is treated as `1.0`.
    #[must_use]
    pub fn place(&self, source: Point) -> DVec3 {
        let scale = self.effective_scale();
        DVec3::new(
            source.x / scale - self.offset_x,
            source.y / scale + self.offset_y,
            self.depth,
        )
    }

    /// The scale actually used by [`LayoutConfig::place`].
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_finite() && self.scale.abs() > f64::EPSILON {
            self.scale
        } else {
            1.0
        }
    }
}
