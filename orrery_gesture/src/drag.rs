// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: raw deltas, smoothed deltas and release velocity.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragTracker::start`] and the pointer-down sample.
//! 2) Feed each move to [`DragTracker::update`]. The returned
//!    [`DragStep::smoothed_delta`] suits incremental effects; to keep a
//!    subject under the pointer, position it from
//!    [`DragTracker::total_offset`] instead.
//! 3) Call [`DragTracker::end`] on release to get the velocity for coasting.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use orrery_gesture::{DragConfig, DragTracker, PointerSample};
//!
//! let mut drag = DragTracker::new(DragConfig { smoothing: 1.0, ..DragConfig::default() });
//! drag.start(PointerSample::new(Point::new(10.0, 20.0), 0.0));
//!
//! // One nominal frame later the pointer has moved (5, 5).
//! let step = drag.update(PointerSample::new(Point::new(15.0, 25.0), 1000.0 / 60.0)).unwrap();
//! assert_eq!(step.raw_delta, Vec2::new(5.0, 5.0));
//! assert_eq!(step.smoothed_delta, Vec2::new(5.0, 5.0));
//! assert!((step.velocity - Vec2::new(5.0, 5.0)).hypot() < 1e-9);
//!
//! assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert!(drag.end().is_some());
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Duration of one nominal display frame at 60 Hz, in milliseconds.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// A normalized pointer position with a timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    /// Pointer position in screen pixels, Y down.
    pub position: Point,
    /// Timestamp in milliseconds from an arbitrary, monotonic origin.
    pub time_ms: f64,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(position: Point, time_ms: f64) -> Self {
        Self { position, time_ms }
    }
}

/// Tuning for [`DragTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConfig {
    /// Exponential smoothing factor in `(0, 1]`. `1` disables smoothing.
    pub smoothing: f64,
    /// Length of one frame in milliseconds; velocities are per frame.
    pub frame_interval_ms: f64,
    /// Screen pixels per world unit when converting drag deltas.
    pub pixels_per_unit: f64,
    /// A release this long after the last movement carries no velocity.
    pub release_idle_ms: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.2,
            frame_interval_ms: NOMINAL_FRAME_MS,
            pixels_per_unit: 50.0,
            release_idle_ms: 100.0,
        }
    }
}

impl DragConfig {
    /// Smoothing factor clamped into `(0, 1]`.
    #[must_use]
    pub fn effective_smoothing(&self) -> f64 {
        if self.smoothing.is_finite() && self.smoothing > 0.0 {
            self.smoothing.min(1.0)
        } else {
            Self::default().smoothing
        }
    }

    /// Frame interval, or [`NOMINAL_FRAME_MS`] when not positive.
    #[must_use]
    pub fn effective_frame_interval(&self) -> f64 {
        if self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0 {
            self.frame_interval_ms
        } else {
            NOMINAL_FRAME_MS
        }
    }

    /// Pixels per world unit, or `1` when not positive.
    #[must_use]
    pub fn effective_pixels_per_unit(&self) -> f64 {
        if self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0 {
            self.pixels_per_unit
        } else {
            1.0
        }
    }
}

/// Result of one [`DragTracker::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Pointer movement since the previous sample.
    pub raw_delta: Vec2,
    /// Exponentially smoothed movement.
    ///
    /// Summing these lags behind the pointer; see [`DragTracker::total_offset`].
    pub smoothed_delta: Vec2,
    /// Instantaneous velocity in pixels per frame.
    pub velocity: Vec2,
}

/// Tracks a single drag gesture.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    config: DragConfig,
    start: Option<PointerSample>,
    last: Option<PointerSample>,
    smoothed: Vec2,
    velocity: Vec2,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Starts tracking from `sample`, discarding any previous drag.
    ///
    /// Velocity and smoothing state are zeroed.
    pub fn start(&mut self, sample: PointerSample) {
        self.start = Some(sample);
        self.last = Some(sample);
        self.smoothed = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
    }

    /// Records a move and returns the deltas since the previous sample.
    ///
    /// Returns `None` when no drag is active or the sample is not finite.
    /// A non-positive time step counts as one frame.
    pub fn update(&mut self, sample: PointerSample) -> Option<DragStep> {
        self.start?;
        let last = self.last?;
        if !sample.position.is_finite() {
            return None;
        }

        let raw_delta = sample.position - last.position;
        let frame = self.config.effective_frame_interval();
        let dt = sample.time_ms - last.time_ms;
        let frames = if dt.is_finite() && dt > 0.0 {
            dt / frame
        } else {
            1.0
        };
        self.velocity = raw_delta / frames;

        let alpha = self.config.effective_smoothing();
        self.smoothed = self.smoothed + (raw_delta - self.smoothed) * alpha;
        self.last = Some(sample);

        Some(DragStep {
            raw_delta,
            smoothed_delta: self.smoothed,
            velocity: self.velocity,
        })
    }

    /// Offset of `current` from the drag's start position.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start.map(|s| current - s.position)
    }

    /// Most recent velocity, in pixels per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// The pointer-down sample of the active drag.
    #[must_use]
    pub fn start_sample(&self) -> Option<PointerSample> {
        self.start
    }

    /// The latest sample of the active drag.
    #[must_use]
    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last
    }

    /// Ends the drag, returning the release velocity if one was active.
    pub fn end(&mut self) -> Option<Vec2> {
        let velocity = self.start.map(|_| self.velocity);
        self.start = None;
        self.last = None;
        self.smoothed = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        velocity
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the drag at `sample`.
    ///
    /// Movement between the last sample and `sample` is reported as a final
    /// step. A release that arrives more than
    /// [`DragConfig::release_idle_ms`] after the last movement carries zero
    /// velocity, so holding still before letting go does not flick.
    pub fn release(&mut self, sample: PointerSample) -> Option<DragRelease> {
        let last = self.last?;
        let step = if sample.position == last.position {
            None
        } else {
            self.update(sample)
        };
        let idle = sample.time_ms - last.time_ms;
        let held_still = !idle.is_finite() || idle > self.config.release_idle_ms;
        let mut velocity = self.end()?;
        if step.is_none() && held_still {
            velocity = Vec2::ZERO;
        }
        Some(DragRelease { step, velocity })
    }
}

/// Result of [`DragTracker::release`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Movement reported by the release sample itself, if it moved.
    pub step: Option<DragStep>,
    /// Release velocity in pixels per frame.
    pub velocity: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, t: f64) -> PointerSample {
        PointerSample::new(Point::new(x, y), t)
    }

    fn unsmoothed() -> DragTracker {
        DragTracker::new(DragConfig {
            smoothing: 1.0,
            ..DragConfig::default()
        })
    }

    #[test]
    fn new_tracker_is_not_dragging() {
        let drag = DragTracker::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.total_offset(Point::ZERO), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(at(1.0, 1.0, 10.0)), None);
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn incremental_deltas() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        let a = drag.update(at(5.0, 3.0, 16.0)).unwrap();
        let b = drag.update(at(8.0, 7.0, 32.0)).unwrap();
        assert_eq!(a.raw_delta, Vec2::new(5.0, 3.0));
        assert_eq!(b.raw_delta, Vec2::new(3.0, 4.0));
        assert_eq!(drag.total_offset(Point::new(8.0, 7.0)), Some(Vec2::new(8.0, 7.0)));
    }

    #[test]
    fn smoothing_converges_on_steady_motion() {
        let mut drag = DragTracker::default();
        drag.start(at(0.0, 0.0, 0.0));
        let first = drag.update(at(10.0, 0.0, 16.0)).unwrap();
        assert!((first.smoothed_delta.x - 2.0).abs() < 1e-12);

        let mut last = first;
        for i in 2..60 {
            let x = 10.0 * f64::from(i);
            last = drag.update(at(x, 0.0, 16.0 * f64::from(i))).unwrap();
        }
        assert!((last.smoothed_delta.x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn velocity_is_per_nominal_frame() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        // Two frames' worth of time for 10px.
        let step = drag.update(at(10.0, 0.0, 2.0 * NOMINAL_FRAME_MS)).unwrap();
        assert!((step.velocity.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_time_step_counts_as_one_frame() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 100.0));
        let step = drag.update(at(4.0, 0.0, 100.0)).unwrap();
        assert_eq!(step.velocity, Vec2::new(4.0, 0.0));
        let step = drag.update(at(6.0, 0.0, 50.0)).unwrap();
        assert_eq!(step.velocity, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        assert_eq!(drag.update(at(f64::NAN, 0.0, 16.0)), None);
        let step = drag.update(at(1.0, 0.0, 16.0)).unwrap();
        assert_eq!(step.raw_delta, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn end_returns_release_velocity_and_resets() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        drag.update(at(3.0, 4.0, NOMINAL_FRAME_MS));
        let v = drag.end().unwrap();
        assert!((v - Vec2::new(3.0, 4.0)).hypot() < 1e-9);
        assert!(!drag.is_dragging());
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        drag.update(at(10.0, 10.0, 16.0));

        drag.start(at(50.0, 60.0, 32.0));
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn release_keeps_velocity_of_last_move() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        drag.update(at(6.0, 0.0, NOMINAL_FRAME_MS));
        let release = drag.release(at(6.0, 0.0, 20.0)).unwrap();
        assert_eq!(release.step, None);
        assert!((release.velocity.x - 6.0).abs() < 1e-9);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_after_holding_still_has_no_velocity() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        drag.update(at(6.0, 0.0, 16.0));
        let release = drag.release(at(6.0, 0.0, 500.0)).unwrap();
        assert_eq!(release.velocity, Vec2::ZERO);
    }

    #[test]
    fn release_with_movement_reports_final_step() {
        let mut drag = unsmoothed();
        drag.start(at(0.0, 0.0, 0.0));
        let release = drag.release(at(2.0, 1.0, NOMINAL_FRAME_MS)).unwrap();
        assert_eq!(release.step.unwrap().raw_delta, Vec2::new(2.0, 1.0));
        assert!((release.velocity - Vec2::new(2.0, 1.0)).hypot() < 1e-9);
        assert_eq!(drag.release(at(0.0, 0.0, 0.0)), None);
    }

    #[test]
    fn bad_config_falls_back() {
        let config = DragConfig {
            smoothing: 0.0,
            frame_interval_ms: -1.0,
            pixels_per_unit: f64::NAN,
            release_idle_ms: 100.0,
        };
        assert_eq!(config.effective_smoothing(), 0.2);
        assert_eq!(config.effective_frame_interval(), NOMINAL_FRAME_MS);
        assert_eq!(config.effective_pixels_per_unit(), 1.0);
        let clamped = DragConfig {
            smoothing: 3.0,
            ..DragConfig::default()
        };
        assert_eq!(clamped.effective_smoothing(), 1.0);
    }
}
