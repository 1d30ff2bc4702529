// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial coasting after a drag is released.
//!
//! Velocity decays geometrically: every step multiplies it by
//! [`InertiaConfig::damping`] and reports the new velocity divided by
//! [`InertiaConfig::scale`]. Coasting stops once both components fall below
//! [`InertiaConfig::epsilon`].
//!
//! [`Coast`] advances one step at a time, which is what a frame-driven host
//! wants. [`apply_inertia`] runs a coast to completion synchronously.

use kurbo::Vec2;

/// Tuning for inertial coasting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertiaConfig {
    /// Per-step velocity multiplier in `(0, 1)`.
    pub damping: f64,
    /// Both velocity components must fall below this to stop.
    pub epsilon: f64,
    /// Divisor applied to the velocity before it is reported.
    pub scale: f64,
    /// Upper bound on the number of steps.
    pub max_steps: usize,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            damping: 0.95,
            epsilon: 0.01,
            scale: 1.0,
            max_steps: 10_000,
        }
    }
}

impl InertiaConfig {
    /// Returns a copy with out-of-range fields replaced by their defaults.
    ///
    /// `damping` must lie strictly inside `(0, 1)`; `epsilon` and `scale`
    /// must be positive and finite.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        Self {
            damping: if valid(self.damping) && self.damping < 1.0 {
                self.damping
            } else {
                defaults.damping
            },
            epsilon: if valid(self.epsilon) {
                self.epsilon
            } else {
                defaults.epsilon
            },
            scale: if valid(self.scale) {
                self.scale
            } else {
                defaults.scale
            },
            max_steps: self.max_steps,
        }
    }

    /// Returns `true` if `velocity` is too small to coast.
    #[must_use]
    pub fn is_at_rest(&self, velocity: Vec2) -> bool {
        velocity.x.abs() < self.epsilon && velocity.y.abs() < self.epsilon
    }
}

/// A coast in progress.
#[derive(Clone, Copy, Debug)]
pub struct Coast {
    config: InertiaConfig,
    velocity: Vec2,
    steps: usize,
}

impl Coast {
    /// Starts coasting from `velocity`.
    ///
    /// A non-finite velocity produces a coast that is already finished.
    #[must_use]
    pub fn new(velocity: Vec2, config: InertiaConfig) -> Self {
        let velocity = if velocity.is_finite() {
            velocity
        } else {
            Vec2::ZERO
        };
        Self {
            config: config.sanitized(),
            velocity,
            steps: 0,
        }
    }

    /// Current velocity, before division by the scale.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` once no further steps will be produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps >= self.config.max_steps || self.config.is_at_rest(self.velocity)
    }

    /// Damps the velocity and returns the scaled delta for this step.
    pub fn step(&mut self) -> Option<Vec2> {
        if self.is_finished() {
            return None;
        }
        self.velocity *= self.config.damping;
        self.steps += 1;
        Some(self.velocity / self.config.scale)
    }
}

/// Runs a coast from `velocity` to completion, calling `on_delta` for each step.
///
/// Returns the number of steps taken. With `0 < damping < 1` the count is
/// bounded by `ceil(ln(epsilon / |v|) / ln(damping))` per component and by
/// [`InertiaConfig::max_steps`].
pub fn apply_inertia(
    velocity: Vec2,
    config: InertiaConfig,
    mut on_delta: impl FnMut(Vec2),
) -> usize {
    let mut coast = Coast::new(velocity, config);
    while let Some(delta) = coast.step() {
        on_delta(delta);
    }
    coast.steps()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flick_terminates_in_expected_steps() {
        let mut last = Vec2::ZERO;
        let steps = apply_inertia(Vec2::new(50.0, 0.0), InertiaConfig::default(), |d| {
            last = d;
        });
        assert_eq!(steps, 167);
        assert!(last.x < 0.01 && last.x > 0.0);
    }

    #[test]
    fn deltas_decay_monotonically() {
        let mut deltas = alloc::vec::Vec::new();
        apply_inertia(Vec2::new(-8.0, 3.0), InertiaConfig::default(), |d| {
            deltas.push(d);
        });
        assert!(!deltas.is_empty());
        for pair in deltas.windows(2) {
            assert!(pair[1].hypot() < pair[0].hypot());
        }
    }

    #[test]
    fn scale_divides_reported_delta() {
        let config = InertiaConfig {
            scale: 10.0,
            ..InertiaConfig::default()
        };
        let mut coast = Coast::new(Vec2::new(20.0, 0.0), config);
        let d = coast.step().unwrap();
        assert!((d.x - 1.9).abs() < 1e-12);
        assert!((coast.velocity().x - 19.0).abs() < 1e-12);
    }

    #[test]
    fn resting_or_non_finite_velocity_takes_no_steps() {
        let config = InertiaConfig::default();
        assert_eq!(apply_inertia(Vec2::new(0.005, -0.005), config, |_| {}), 0);
        assert_eq!(apply_inertia(Vec2::new(f64::NAN, 1.0), config, |_| {}), 0);
        assert_eq!(apply_inertia(Vec2::new(f64::INFINITY, 0.0), config, |_| {}), 0);
    }

    #[test]
    fn invalid_damping_uses_default() {
        for damping in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let config = InertiaConfig {
                damping,
                ..InertiaConfig::default()
            };
            assert_eq!(config.sanitized().damping, 0.95);
            assert_eq!(apply_inertia(Vec2::new(50.0, 0.0), config, |_| {}), 167);
        }
    }

    #[test]
    fn max_steps_caps_the_coast() {
        let config = InertiaConfig {
            damping: 0.999_999,
            max_steps: 25,
            ..InertiaConfig::default()
        };
        assert_eq!(apply_inertia(Vec2::new(1e6, 1e6), config, |_| {}), 25);
    }
}
