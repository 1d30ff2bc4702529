// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `tan`
use glam::DVec3;
use kurbo::{Rect, Vec2};

use crate::modes::ProjectionPlane;

const MIN_FOV_DEGREES: f64 = 1.0;
const MAX_FOV_DEGREES: f64 = 179.0;
const MIN_NEAR: f64 = 1e-4;

/// A perspective camera: pose plus frustum parameters.
///
/// The state is plain data. Projection code only reads it; changes go
/// through [`CameraRig`] or direct field writes by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    /// Eye position in world space.
    pub position: DVec3,
    /// Look-at point in world space.
    pub target: DVec3,
    /// Approximate up direction; re-orthogonalized by [`CameraState::basis`].
    pub up: DVec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Width over height of the viewport.
    pub aspect: f64,
    /// Distance to the near clip plane.
    pub near: f64,
    /// Distance to the far clip plane.
    pub far: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 10.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_degrees: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Orthonormal camera-space axes expressed in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    /// Screen-right direction.
    pub right: DVec3,
    /// Screen-up direction.
    pub up: DVec3,
    /// Viewing direction.
    pub forward: DVec3,
}

impl CameraState {
    /// Creates a camera at `position` looking at `target` with default lens settings.
    #[must_use]
    pub fn looking_at(position: DVec3, target: DVec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    /// Returns a copy with every parameter forced into a usable range.
    ///
    /// - `fov_degrees` is clamped into `[1, 179]`.
    /// - Non-positive `aspect` becomes `1`.
    /// - `near` is at least `1e-4`; `far` is strictly beyond `near`.
    /// - Non-finite vectors fall back to the default pose.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let fov_degrees = if self.fov_degrees.is_finite() {
            self.fov_degrees.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES)
        } else {
            defaults.fov_degrees
        };
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 {
            self.aspect
        } else {
            1.0
        };
        let near = if self.near.is_finite() {
            self.near.max(MIN_NEAR)
        } else {
            defaults.near
        };
        let far = if self.far.is_finite() && self.far > near {
            self.far
        } else {
            near * 1e4
        };
        let pick = |v: DVec3, fallback: DVec3| if v.is_finite() { v } else { fallback };
        let up = if self.up.is_finite() && self.up != DVec3::ZERO {
            self.up
        } else {
            DVec3::Y
        };
        Self {
            position: pick(self.position, defaults.position),
            target: pick(self.target, defaults.target),
            up,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Distance from the eye to the look-at point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.position.distance(self.target)
    }

    /// Returns the orthonormal camera axes.
    ///
    /// A zero-length view direction falls back to looking down -Z, and an
    /// `up` parallel to the view direction is replaced by another world axis.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        let mut forward = (self.target - self.position).normalize_or_zero();
        if forward == DVec3::ZERO {
            forward = DVec3::NEG_Z;
        }
        let right = [self.up, DVec3::Y, DVec3::NEG_Z, DVec3::X]
            .into_iter()
            .map(|up| forward.cross(up).normalize_or_zero())
            .find(|r| *r != DVec3::ZERO)
            .unwrap_or(DVec3::X);
        let up = right.cross(forward);
        CameraBasis { right, up, forward }
    }

    /// Half of the vertical field of view, in radians.
    #[must_use]
    pub fn half_fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians() * 0.5
    }

    /// Half extents `(width, height)` of the view cross-section at `distance`.
    #[must_use]
    pub fn half_extents_at(&self, distance: f64) -> Vec2 {
        let half_height = self.half_fov_radians().tan() * distance;
        Vec2::new(half_height * self.aspect, half_height)
    }
}

/// A camera with a home pose and distance limits.
///
/// `CameraRig` provides the explicit update operations a host wires to its
/// controls: pan, zoom (dolly toward the target), retarget (for example
/// from a minimap click), fit to a bounding box, and reset to home.
#[derive(Clone, Debug)]
pub struct CameraRig {
    camera: CameraState,
    home: CameraState,
    min_distance: f64,
    max_distance: f64,
}

impl CameraRig {
    /// Creates a rig whose home pose is `camera`.
    ///
    /// Distance is clamped to the range `[0.5, 500]` by default.
    #[must_use]
    pub fn new(camera: CameraState) -> Self {
        let camera = camera.sanitized();
        Self {
            camera,
            home: camera,
            min_distance: 0.5,
            max_distance: 500.0,
        }
    }

    /// Returns the current camera.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Replaces the current camera without changing the home pose.
    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera = camera.sanitized();
    }

    /// Returns the home pose used by [`Self::reset`].
    #[must_use]
    pub fn home(&self) -> &CameraState {
        &self.home
    }

    /// Replaces the home pose.
    pub fn set_home(&mut self, home: CameraState) {
        self.home = home.sanitized();
    }

    /// Sets the minimum and maximum eye-to-target distance.
    ///
    /// The provided range is normalized so that `min <= max`, and the
    /// current distance is clamped into the new range.
    pub fn set_distance_limits(&mut self, min_distance: f64, max_distance: f64) {
        if !min_distance.is_finite() || !max_distance.is_finite() {
            return;
        }
        let (lo, hi) = if min_distance <= max_distance {
            (min_distance, max_distance)
        } else {
            (max_distance, min_distance)
        };
        self.min_distance = lo.max(MIN_NEAR);
        self.max_distance = hi.max(self.min_distance);
        self.set_distance(self.camera.distance());
    }

    /// Returns the `(min, max)` distance limits.
    #[must_use]
    pub fn distance_limits(&self) -> (f64, f64) {
        (self.min_distance, self.max_distance)
    }

    /// Moves eye and target together by a world-space delta.
    pub fn pan_by(&mut self, delta: DVec3) {
        if !delta.is_finite() || delta == DVec3::ZERO {
            return;
        }
        self.camera.position += delta;
        self.camera.target += delta;
    }

    /// Pans by a displacement expressed along the camera's screen axes.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        let basis = self.camera.basis();
        self.pan_by(basis.right * delta.x + basis.up * delta.y);
    }

    /// Dollies toward (`factor > 1`) or away from (`factor < 1`) the target.
    ///
    /// The resulting distance is clamped to the configured limits.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.set_distance(self.camera.distance() / factor);
    }

    /// Moves the look-at point to `target`, keeping the eye's offset from it.
    pub fn retarget(&mut self, target: DVec3) {
        if !target.is_finite() {
            return;
        }
        let offset = self.camera.position - self.camera.target;
        self.camera.target = target;
        self.camera.position = target + offset;
    }

    /// Frames `rect`, a rectangle on `plane`, keeping the current view direction.
    ///
    /// The target moves to the rectangle's center (at the current target's
    /// depth) and the distance is chosen so the rectangle, grown by
    /// `margin`, fits both the vertical and the horizontal field of view.
    pub fn fit_bounds(&mut self, rect: Rect, plane: ProjectionPlane, margin: f64) {
        if !rect.is_finite() {
            return;
        }
        let margin = if margin.is_finite() { margin.max(1.0) } else { 1.0 };
        let rect = rect.abs();
        let half_w = rect.width() * 0.5 * margin;
        let half_h = rect.height() * 0.5 * margin;

        // Half extents at unit distance.
        let unit = self.camera.half_extents_at(1.0);
        let distance = (half_h / unit.y).max(half_w / unit.x);

        let depth = plane.depth_of(self.camera.target);
        let center = plane.lift(rect.center(), depth);
        let back = (self.camera.position - self.camera.target).normalize_or_zero();
        let back = if back == DVec3::ZERO { plane.normal() } else { back };

        let distance = distance.clamp(self.min_distance, self.max_distance);
        self.camera.target = center;
        self.camera.position = center + back * distance;

        #[cfg(feature = "tracing")]
        tracing::trace!(?rect, distance, "camera fitted to bounds");
    }

    /// Restores the home pose.
    pub fn reset(&mut self) {
        self.camera = self.home;
    }

    fn set_distance(&mut self, distance: f64) {
        let distance = distance.clamp(self.min_distance, self.max_distance);
        let mut dir = (self.camera.position - self.camera.target).normalize_or_zero();
        if dir == DVec3::ZERO {
            dir = -self.camera.basis().forward;
        }
        self.camera.position = self.camera.target + dir * distance;
    }
}
