// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::drag::{DragConfig, DragStep, DragTracker, PointerSample};
use crate::inertia::{Coast, InertiaConfig};
use crate::scheduler::{FrameScheduler, FrameToken};

/// Phase of a [`DragGesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down and nothing is moving.
    #[default]
    Idle,
    /// A pointer is down and moves are being tracked.
    Dragging,
    /// The pointer was released and motion is decaying frame by frame.
    Coasting,
}

/// Outcome of [`DragGesture::pointer_up`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Movement reported by the release sample itself, if it moved.
    pub step: Option<DragStep>,
    /// Release velocity in pixels per frame.
    pub velocity: Vec2,
    /// Whether a coast was scheduled.
    pub coasting: bool,
}

/// Drag-and-coast state machine driven by pointer samples and frame callbacks.
///
/// Transitions:
/// - `Idle` or `Coasting` to `Dragging` on [`Self::pointer_down`]. A
///   running coast is cancelled and its pending frame withdrawn.
/// - `Dragging` stays `Dragging` on [`Self::pointer_move`].
/// - `Dragging` to `Coasting` on [`Self::pointer_up`] when coasting is
///   requested and the release velocity is not at rest, else to `Idle`.
/// - `Coasting` to `Idle` once the coast decays in [`Self::on_frame`].
///
/// Calls that do not fit the current phase are no-ops, as are frame
/// callbacks whose token is not the one currently pending.
#[derive(Clone, Debug, Default)]
pub struct DragGesture {
    tracker: DragTracker,
    inertia: InertiaConfig,
    coast: Option<Coast>,
    pending: Option<FrameToken>,
}

impl DragGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new(drag: DragConfig, inertia: InertiaConfig) -> Self {
        Self {
            tracker: DragTracker::new(drag),
            inertia,
            coast: None,
            pending: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.tracker.is_dragging() {
            GesturePhase::Dragging
        } else if self.coast.is_some() {
            GesturePhase::Coasting
        } else {
            GesturePhase::Idle
        }
    }

    /// The underlying drag tracker.
    #[must_use]
    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    /// Inertia settings used for new coasts.
    #[must_use]
    pub fn inertia(&self) -> &InertiaConfig {
        &self.inertia
    }

    /// The frame currently awaited by a coast.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Begins a drag at `sample`, cancelling any coast in flight.
    pub fn pointer_down(&mut self, sample: PointerSample, scheduler: &mut impl FrameScheduler) {
        self.stop_coast(scheduler);
        self.tracker.start(sample);
    }

    /// Tracks a move. Returns `None` unless dragging.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<DragStep> {
        self.tracker.update(sample)
    }

    /// Ends the drag at `sample`.
    ///
    /// When `coast` is `true` and the release velocity is above the inertia
    /// epsilon, a frame is requested and the gesture enters
    /// [`GesturePhase::Coasting`]. Returns `None` if no drag was active.
    pub fn pointer_up(
        &mut self,
        sample: PointerSample,
        coast: bool,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<Release> {
        let release = self.tracker.release(sample)?;
        let inertia = self.inertia.sanitized();
        let coasting = coast && release.velocity.is_finite() && !inertia.is_at_rest(release.velocity);
        if coasting {
            self.coast = Some(Coast::new(release.velocity, inertia));
            self.pending = Some(scheduler.request_frame());
            #[cfg(feature = "tracing")]
            tracing::debug!(velocity = ?release.velocity, "coast started");
        }
        Some(Release {
            step: release.step,
            velocity: release.velocity,
            coasting,
        })
    }

    /// Advances a coast by one step for the frame identified by `token`.
    ///
    /// Returns the step's delta in pixels. Another frame is requested while
    /// the coast has steps left. Stale tokens return `None` and change
    /// nothing.
    pub fn on_frame(
        &mut self,
        token: FrameToken,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<Vec2> {
        if self.pending != Some(token) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?token, "ignoring stale frame");
            return None;
        }
        self.pending = None;
        let coast = self.coast.as_mut()?;
        let delta = coast.step();
        if delta.is_some() && !coast.is_finished() {
            self.pending = Some(scheduler.request_frame());
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(steps = coast.steps(), "coast finished");
            self.coast = None;
        }
        delta
    }

    /// Abandons any drag or coast and withdraws the pending frame.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        self.stop_coast(scheduler);
        self.tracker.end();
    }

    fn stop_coast(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
        if self.coast.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("coast cancelled");
        }
    }
}
