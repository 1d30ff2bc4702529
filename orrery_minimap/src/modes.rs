// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::{Point, Vec2};

/// How fitted content should be positioned inside the minimap canvas.
///
/// This mode is consulted by [`crate::MinimapProjection::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Align the world-space minimum corner with the padded canvas corner.
    ///
    /// World `min_x` maps to `padding` and world `min_y` maps to
    /// `height - padding`; the unused part of the shorter axis stays empty.
    #[default]
    AlignMin,
    /// Center the fitted content within the padded canvas.
    Center,
}

/// Which pair of world axes the minimap flattens onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionPlane {
    /// Front view: world X and Y, Z ignored.
    ///
    /// This is the plane the initial layout lives in.
    #[default]
    Front,
    /// Top-down view: world X and Z, Y ignored.
    ///
    /// Minimap "up" corresponds to world -Z, so a camera looking down -Z
    /// moves up the minimap as it advances.
    Top,
}

impl ProjectionPlane {
    /// Drops the axis normal to this plane.
    #[must_use]
    pub fn flatten(self, p: DVec3) -> Point {
        match self {
            Self::Front => Point::new(p.x, p.y),
            Self::Top => Point::new(p.x, -p.z),
        }
    }

    /// Inverse of [`Self::flatten`], placing the point at `depth` along the
    /// plane normal.
    #[must_use]
    pub fn lift(self, p: Point, depth: f64) -> DVec3 {
        match self {
            Self::Front => DVec3::new(p.x, p.y, depth),
            Self::Top => DVec3::new(p.x, depth, -p.y),
        }
    }

    /// Maps a planar displacement to a world displacement within the plane.
    #[must_use]
    pub fn lift_delta(self, d: Vec2) -> DVec3 {
        self.lift(d.to_point(), 0.0)
    }

    /// Coordinate of `p` along the plane normal.
    #[must_use]
    pub fn depth_of(self, p: DVec3) -> f64 {
        match self {
            Self::Front => p.z,
            Self::Top => p.y,
        }
    }

    /// Unit normal of the plane.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            Self::Front => DVec3::Z,
            Self::Top => DVec3::Y,
        }
    }
}
