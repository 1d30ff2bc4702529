// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perspective frustum corners and their footprint on the layout plane.
//!
//! Corners are always ordered bottom-left, bottom-right, top-right, top-left
//! as seen through the camera, so consecutive corners form the outline
//! polygon.

use glam::DVec3;

use crate::camera::CameraState;
use crate::modes::ProjectionPlane;

/// Near- and far-plane corners of a camera frustum in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    /// Corners of the near clip plane.
    pub near: [DVec3; 4],
    /// Corners of the far clip plane.
    pub far: [DVec3; 4],
}

/// Corners of the view cross-section at `distance` along the view direction.
///
/// `half_height = tan(fov / 2) * distance` and
/// `half_width = half_height * aspect`, offset from the point `distance`
/// ahead of the eye along the camera's right and up axes.
#[must_use]
pub fn plane_corners(camera: &CameraState, distance: f64) -> [DVec3; 4] {
    let camera = camera.sanitized();
    let basis = camera.basis();
    let half = camera.half_extents_at(distance);
    let center = camera.position + basis.forward * distance;
    let right = basis.right * half.x;
    let up = basis.up * half.y;
    [
        center - right - up,
        center + right - up,
        center + right + up,
        center - right + up,
    ]
}

/// Near- and far-plane corners of `camera`.
#[must_use]
pub fn frustum_corners(camera: &CameraState) -> Frustum {
    let camera = camera.sanitized();
    Frustum {
        near: plane_corners(&camera, camera.near),
        far: plane_corners(&camera, camera.far),
    }
}

/// Footprint of the camera's view on the layout plane.
///
/// Each far-plane corner ray from the eye is intersected with the plane at
/// `depth` along `plane`'s normal. Rays that are parallel to the plane, point
/// away from it, or reach it beyond the far plane use the far-plane corner
/// instead, so the result is always four finite points.
#[must_use]
pub fn visible_region(camera: &CameraState, plane: ProjectionPlane, depth: f64) -> [DVec3; 4] {
    let camera = camera.sanitized();
    let eye = camera.position;
    let normal = plane.normal();
    let eye_depth = eye.dot(normal);
    let depth = if depth.is_finite() { depth } else { 0.0 };

    plane_corners(&camera, camera.far).map(|far_corner| {
        let dir = far_corner - eye;
        let denom = dir.dot(normal);
        if denom.abs() <= f64::EPSILON {
            return far_corner;
        }
        let t = (depth - eye_depth) / denom;
        if t.is_finite() && t > 0.0 && t <= 1.0 {
            eye + dir * t
        } else {
            far_corner
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3, tol: f64) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn plane_corners_match_fov_and_aspect() {
        let cam = CameraState {
            fov_degrees: 90.0,
            aspect: 2.0,
            ..CameraState::default()
        };
        let [bl, br, tr, tl] = plane_corners(&cam, 10.0);
        assert!(close(bl, DVec3::new(-20.0, -10.0, 0.0), 1e-9));
        assert!(close(br, DVec3::new(20.0, -10.0, 0.0), 1e-9));
        assert!(close(tr, DVec3::new(20.0, 10.0, 0.0), 1e-9));
        assert!(close(tl, DVec3::new(-20.0, 10.0, 0.0), 1e-9));
    }

    #[test]
    fn near_plane_is_inside_far_plane() {
        let f = frustum_corners(&CameraState::default());
        let near_w = f.near[0].distance(f.near[1]);
        let far_w = f.far[0].distance(f.far[1]);
        assert!(near_w < far_w);
        // Near corners sit `near` units in front of the eye.
        assert!((f.near[0].z - (10.0 - 0.1)).abs() < 1e-9);
    }

    #[test]
    fn visible_region_hits_the_layout_plane() {
        let cam = CameraState {
            fov_degrees: 90.0,
            aspect: 2.0,
            ..CameraState::default()
        };
        let region = visible_region(&cam, ProjectionPlane::Front, 0.0);
        for corner in region {
            assert!(corner.z.abs() < 1e-9);
        }
        assert!(close(region[2], DVec3::new(20.0, 10.0, 0.0), 1e-6));
    }

    #[test]
    fn rays_missing_the_plane_fall_back_to_far_corners() {
        // Looking away from the layout plane.
        let cam = CameraState {
            target: DVec3::new(0.0, 0.0, 20.0),
            ..CameraState::default()
        };
        let region = visible_region(&cam, ProjectionPlane::Front, 0.0);
        let far = frustum_corners(&cam).far;
        assert_eq!(region, far);
    }

    #[test]
    fn top_plane_uses_y_as_depth() {
        let cam = CameraState::looking_at(DVec3::new(0.0, 10.0, 0.0), DVec3::ZERO);
        let region = visible_region(&cam, ProjectionPlane::Top, 0.0);
        for corner in region {
            assert!(corner.y.abs() < 1e-9);
        }
    }
}
