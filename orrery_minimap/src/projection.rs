// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::bounds::with_min_extent;
use crate::modes::{FitMode, ProjectionPlane};

/// Smallest world extent used when fitting bounds into the canvas.
pub const DEFAULT_MIN_EXTENT: f64 = 1.0;

/// Smallest usable canvas extent, in pixels, once padding is removed.
const MIN_AVAILABLE: f64 = 1.0;

/// Uniform, Y-flipped mapping from planar world coordinates into a minimap canvas.
///
/// `MinimapProjection` fits a world-space bounding rectangle into a fixed-size
/// canvas with padding on every side:
/// - The scale is uniform (`min` of the two axis ratios) so the layout is
///   never distorted.
/// - World `min_x` maps to `padding`; world Y increases upward, so world
///   `min_y` maps to `height - padding`.
/// - [`Self::unproject`] is the exact inverse of [`Self::project`].
///
/// Degenerate inputs never produce NaN or infinity: zero-extent bounds are
/// grown to a minimum extent and the usable canvas area is floored to one
/// pixel.
#[derive(Clone, Copy, Debug)]
pub struct MinimapProjection {
    canvas: Size,
    padding: f64,
    bounds: Rect,
    fit_mode: FitMode,
    scale: f64,
    world_to_canvas: Affine,
    canvas_to_world: Affine,
}

impl MinimapProjection {
    /// Fits `bounds` into `canvas` with `padding`, using [`DEFAULT_MIN_EXTENT`]
    /// and [`FitMode::AlignMin`].
    #[must_use]
    pub fn new(bounds: Rect, canvas: Size, padding: f64) -> Self {
        Self::with_options(bounds, canvas, padding, DEFAULT_MIN_EXTENT, FitMode::AlignMin)
    }

    /// Fits `bounds` into `canvas` with explicit degenerate-extent floor and fit mode.
    #[must_use]
    pub fn with_options(
        bounds: Rect,
        canvas: Size,
        padding: f64,
        min_extent: f64,
        fit_mode: FitMode,
    ) -> Self {
        let canvas = if canvas.is_finite() {
            Size::new(canvas.width.max(0.0), canvas.height.max(0.0))
        } else {
            Size::ZERO
        };
        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        let bounds = if bounds.is_finite() {
            with_min_extent(bounds, min_extent)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?bounds, "non-finite minimap bounds, using a unit rect");
            with_min_extent(Rect::ZERO, min_extent)
        };

        let mut projection = Self {
            canvas,
            padding,
            bounds,
            fit_mode,
            scale: 1.0,
            world_to_canvas: Affine::IDENTITY,
            canvas_to_world: Affine::IDENTITY,
        };
        projection.rebuild_transforms();
        projection
    }

    /// Returns the canvas size in pixels.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Returns the canvas rectangle, anchored at the origin.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.canvas.to_rect()
    }

    /// Returns the padding in pixels.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the fitted world bounds, after the minimum-extent floor.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Returns canvas pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the world-to-canvas transform.
    #[must_use]
    pub fn world_to_canvas(&self) -> Affine {
        self.world_to_canvas
    }

    /// Converts a planar world point into canvas coordinates.
    #[must_use]
    pub fn project(&self, world: Point) -> Point {
        self.world_to_canvas * world
    }

    /// Flattens a 3D world point onto `plane` and projects it.
    #[must_use]
    pub fn project_3d(&self, world: DVec3, plane: ProjectionPlane) -> Point {
        self.project(plane.flatten(world))
    }

    /// Converts a canvas point back into planar world coordinates.
    #[must_use]
    pub fn unproject(&self, canvas: Point) -> Point {
        self.canvas_to_world * canvas
    }

    /// Converts a world displacement into a canvas displacement.
    #[must_use]
    pub fn project_vec(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x * self.scale, -world.y * self.scale)
    }

    /// Snapshot of the current projection for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MinimapProjectionDebugInfo {
        MinimapProjectionDebugInfo {
            canvas: self.canvas,
            padding: self.padding,
            bounds: self.bounds,
            fit_mode: self.fit_mode,
            scale: self.scale,
            projected_bounds: self.world_to_canvas.transform_rect_bbox(self.bounds),
        }
    }

    fn rebuild_transforms(&mut self) {
        let available = Vec2::new(
            (self.canvas.width - 2.0 * self.padding).max(MIN_AVAILABLE),
            (self.canvas.height - 2.0 * self.padding).max(MIN_AVAILABLE),
        );
        let sx = available.x / self.bounds.width();
        let sy = available.y / self.bounds.height();
        let scale = sx.min(sy);
        self.scale = scale;

        let slack = match self.fit_mode {
            FitMode::AlignMin => Vec2::ZERO,
            FitMode::Center => {
                (available - Vec2::new(self.bounds.width(), self.bounds.height()) * scale) * 0.5
            }
        };

        // Shift the world minimum to the origin, scale with Y flipped, then
        // move into the padded canvas area.
        let origin = Vec2::new(
            self.padding + slack.x,
            self.canvas.height - self.padding - slack.y,
        );
        self.world_to_canvas = Affine::translate(origin)
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate(-self.bounds.origin().to_vec2());
        self.canvas_to_world = self.world_to_canvas.inverse();
    }
}

/// Projects `world` into a canvas of `canvas` size fitted to `bounds`.
///
/// Shorthand for [`MinimapProjection::new`] followed by
/// [`MinimapProjection::project`].
#[must_use]
pub fn project(world: Point, bounds: Rect, canvas: Size, padding: f64) -> Point {
    MinimapProjection::new(bounds, canvas, padding).project(world)
}

/// Inverse of [`project`] for the same `bounds`, `canvas` and `padding`.
#[must_use]
pub fn unproject(screen: Point, bounds: Rect, canvas: Size, padding: f64) -> Point {
    MinimapProjection::new(bounds, canvas, padding).unproject(screen)
}

/// Debug snapshot of a [`MinimapProjection`].
#[derive(Clone, Copy, Debug)]
pub struct MinimapProjectionDebugInfo {
    /// Canvas size in pixels.
    pub canvas: Size,
    /// Padding in pixels.
    pub padding: f64,
    /// Fitted world bounds.
    pub bounds: Rect,
    /// Fit mode in effect.
    pub fit_mode: FitMode,
    /// Canvas pixels per world unit.
    pub scale: f64,
    /// The fitted bounds in canvas coordinates.
    pub projected_bounds: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{FitMode, MinimapProjection};

    #[test]
    fn three_node_scenario() {
        let bounds = Rect::new(0.0, 0.0, 2.0, 2.0);
        let proj = MinimapProjection::new(bounds, Size::new(200.0, 200.0), 20.0);
        assert_eq!(proj.scale(), 80.0);
        assert_eq!(proj.project(Point::new(2.0, 0.0)), Point::new(180.0, 180.0));
        assert_eq!(proj.project(Point::new(0.0, 2.0)), Point::new(20.0, 20.0));
        assert_eq!(proj.project(Point::new(0.0, 0.0)), Point::new(20.0, 180.0));
    }

    #[test]
    fn aspect_is_preserved() {
        // Wide content in a square canvas: X limits the scale.
        let proj = MinimapProjection::new(
            Rect::new(0.0, 0.0, 4.0, 1.0),
            Size::new(100.0, 100.0),
            10.0,
        );
        assert_eq!(proj.scale(), 20.0);
        let p = proj.project(Point::new(4.0, 1.0));
        assert_eq!(p, Point::new(90.0, 70.0));
    }

    #[test]
    fn center_mode_centers_short_axis() {
        let proj = MinimapProjection::with_options(
            Rect::new(0.0, 0.0, 4.0, 1.0),
            Size::new(100.0, 100.0),
            10.0,
            1.0,
            FitMode::Center,
        );
        let lo = proj.project(Point::new(0.0, 0.0));
        let hi = proj.project(Point::new(4.0, 1.0));
        assert!((lo.y + hi.y - 100.0).abs() < 1e-9);
        assert!((lo.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_bounds_stay_finite() {
        let proj = MinimapProjection::new(
            Rect::new(3.0, 3.0, 3.0, 3.0),
            Size::new(200.0, 200.0),
            20.0,
        );
        let p = proj.project(Point::new(3.0, 3.0));
        assert!(p.is_finite());
        assert!(proj.scale().is_finite());
        // The single point sits in the middle of the padded square.
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn padding_larger_than_canvas_is_floored() {
        let proj = MinimapProjection::new(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Size::new(10.0, 10.0),
            50.0,
        );
        assert!(proj.scale() > 0.0);
        let back = proj.unproject(proj.project(Point::new(0.5, 0.5)));
        assert!((back.x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn non_finite_bounds_are_replaced() {
        let proj = MinimapProjection::new(
            Rect::new(f64::NAN, 0.0, 1.0, 1.0),
            Size::new(100.0, 100.0),
            0.0,
        );
        assert!(proj.scale().is_finite());
        assert!(proj.bounds().is_finite());
    }

    #[test]
    fn debug_info_reports_projected_bounds() {
        let proj = MinimapProjection::new(
            Rect::new(0.0, 0.0, 2.0, 2.0),
            Size::new(200.0, 200.0),
            20.0,
        );
        let info = proj.debug_info();
        assert_eq!(info.projected_bounds, Rect::new(20.0, 20.0, 180.0, 180.0));
        assert_eq!(info.fit_mode, FitMode::AlignMin);
    }
}
