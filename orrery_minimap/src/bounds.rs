// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::{Point, Rect};

use crate::modes::ProjectionPlane;
use crate::projection::DEFAULT_MIN_EXTENT;

/// Axis-aligned bounds of `points` on `plane`.
///
/// Returns `None` when no finite point is supplied. Callers must handle that
/// case before deriving a scale from the bounds.
#[must_use]
pub fn compute_bounds(
    points: impl IntoIterator<Item = DVec3>,
    plane: ProjectionPlane,
) -> Option<Rect> {
    bounds_of_points(points.into_iter().map(|p| plane.flatten(p)))
}

/// Axis-aligned bounds of planar `points`, skipping non-finite ones.
#[must_use]
pub fn bounds_of_points(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut out: Option<Rect> = None;
    for p in points {
        if !p.is_finite() {
            continue;
        }
        out = Some(match out {
            None => Rect::from_points(p, p),
            Some(r) => Rect::new(
                r.x0.min(p.x),
                r.y0.min(p.y),
                r.x1.max(p.x),
                r.y1.max(p.y),
            ),
        });
    }
    out
}

/// Grows `rect` symmetrically so neither side is shorter than `min_extent`.
///
/// Coincident or colinear inputs produce zero-extent bounds; this keeps the
/// minimap scale finite in that case.
#[must_use]
pub fn with_min_extent(rect: Rect, min_extent: f64) -> Rect {
    let min_extent = if min_extent.is_finite() && min_extent > 0.0 {
        min_extent
    } else {
        DEFAULT_MIN_EXTENT
    };
    let mut r = rect.abs();
    let c = r.center();
    if r.width() < min_extent {
        r.x0 = c.x - min_extent * 0.5;
        r.x1 = c.x + min_extent * 0.5;
    }
    if r.height() < min_extent {
        r.y0 = c.y - min_extent * 0.5;
        r.y1 = c.y + min_extent * 0.5;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(compute_bounds([], ProjectionPlane::Front), None);
    }

    #[test]
    fn z_is_ignored_on_front_plane() {
        let b = compute_bounds(
            [DVec3::new(0.0, 0.0, 100.0), DVec3::new(2.0, 1.0, -100.0)],
            ProjectionPlane::Front,
        )
        .unwrap();
        assert_eq!(b, Rect::new(0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let b = compute_bounds(
            [DVec3::new(f64::NAN, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
            ProjectionPlane::Front,
        )
        .unwrap();
        assert_eq!(b, Rect::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn min_extent_grows_degenerate_axes_only() {
        let r = with_min_extent(Rect::new(0.0, 5.0, 10.0, 5.0), 2.0);
        assert_eq!(r, Rect::new(0.0, 4.0, 10.0, 6.0));

        let untouched = Rect::new(0.0, 0.0, 3.0, 3.0);
        assert_eq!(with_min_extent(untouched, 2.0), untouched);
    }
}
