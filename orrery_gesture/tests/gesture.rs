// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `orrery_gesture` state machine and inertia bounds.

use kurbo::{Point, Vec2};
use orrery_gesture::{
    DragConfig, DragGesture, FrameQueue, FrameScheduler, GesturePhase, InertiaConfig,
    NOMINAL_FRAME_MS, PointerSample, apply_inertia,
};
use proptest::prelude::*;

fn at(x: f64, y: f64, t: f64) -> PointerSample {
    PointerSample::new(Point::new(x, y), t)
}

fn gesture() -> DragGesture {
    DragGesture::new(
        DragConfig {
            smoothing: 1.0,
            ..DragConfig::default()
        },
        InertiaConfig::default(),
    )
}

/// Starts a drag and flicks right at 20px per frame.
fn flick(g: &mut DragGesture, frames: &mut FrameQueue, coast: bool) -> bool {
    g.pointer_down(at(0.0, 0.0, 0.0), frames);
    g.pointer_move(at(20.0, 0.0, NOMINAL_FRAME_MS));
    g.pointer_up(at(20.0, 0.0, NOMINAL_FRAME_MS), coast, frames)
        .unwrap()
        .coasting
}

#[test]
fn phases_follow_pointer_events() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert_eq!(g.phase(), GesturePhase::Idle);

    g.pointer_down(at(0.0, 0.0, 0.0), &mut frames);
    assert_eq!(g.phase(), GesturePhase::Dragging);

    let step = g.pointer_move(at(4.0, -2.0, 16.0)).unwrap();
    assert_eq!(step.smoothed_delta, Vec2::new(4.0, -2.0));
    assert_eq!(g.phase(), GesturePhase::Dragging);

    // Not coasting: straight back to idle, nothing scheduled.
    assert!(!flick(&mut g, &mut frames, false));
    assert_eq!(g.phase(), GesturePhase::Idle);
    assert!(frames.is_empty());
}

#[test]
fn events_without_pointer_down_are_ignored() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert!(g.pointer_move(at(1.0, 1.0, 1.0)).is_none());
    assert!(g.pointer_up(at(1.0, 1.0, 2.0), true, &mut frames).is_none());
    assert_eq!(g.phase(), GesturePhase::Idle);
    assert!(frames.is_empty());
}

#[test]
fn coast_runs_one_step_per_frame_until_rest() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert!(flick(&mut g, &mut frames, true));
    assert_eq!(g.phase(), GesturePhase::Coasting);

    let mut steps = 0;
    let mut total = Vec2::ZERO;
    while !frames.is_empty() {
        let tokens = frames.drain();
        assert_eq!(tokens.len(), 1);
        if let Some(delta) = g.on_frame(tokens[0], &mut frames) {
            steps += 1;
            total += delta;
        }
    }

    let expected = apply_inertia(Vec2::new(20.0, 0.0), InertiaConfig::default(), |_| {});
    assert_eq!(steps, expected);
    // Geometric series: 20 * 0.95 / (1 - 0.95) minus the tail below epsilon.
    assert!(total.x > 370.0 && total.x < 380.0, "{total:?}");
    assert_eq!(g.phase(), GesturePhase::Idle);
}

#[test]
fn new_drag_cancels_coast() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert!(flick(&mut g, &mut frames, true));
    let stale = g.pending_frame().unwrap();

    g.pointer_down(at(5.0, 5.0, 100.0), &mut frames);
    assert_eq!(g.phase(), GesturePhase::Dragging);
    assert!(!frames.is_pending(stale));
    assert!(g.pending_frame().is_none());

    // A late callback for the withdrawn frame does nothing.
    assert_eq!(g.on_frame(stale, &mut frames), None);
    assert_eq!(g.phase(), GesturePhase::Dragging);
    assert!(frames.is_empty());
}

#[test]
fn unknown_token_is_ignored_while_coasting() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert!(flick(&mut g, &mut frames, true));
    let pending = g.pending_frame().unwrap();

    let other = frames.request_frame();
    assert_eq!(g.on_frame(other, &mut frames), None);
    assert_eq!(g.pending_frame(), Some(pending));
    assert_eq!(g.phase(), GesturePhase::Coasting);
}

#[test]
fn slow_release_does_not_coast() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    g.pointer_down(at(0.0, 0.0, 0.0), &mut frames);
    g.pointer_move(at(0.005, 0.0, NOMINAL_FRAME_MS));
    let release = g
        .pointer_up(at(0.005, 0.0, NOMINAL_FRAME_MS), true, &mut frames)
        .unwrap();
    assert!(!release.coasting);
    assert_eq!(g.phase(), GesturePhase::Idle);
}

#[test]
fn cancel_withdraws_everything() {
    let mut frames = FrameQueue::new();
    let mut g = gesture();
    assert!(flick(&mut g, &mut frames, true));
    g.cancel(&mut frames);
    assert_eq!(g.phase(), GesturePhase::Idle);
    assert!(frames.is_empty());
}

proptest! {
    #[test]
    fn inertia_terminates_within_log_bound(
        vx in -500.0..500.0_f64,
        vy in -500.0..500.0_f64,
        damping in 0.5..0.99_f64,
    ) {
        let config = InertiaConfig { damping, ..InertiaConfig::default() };
        let steps = apply_inertia(Vec2::new(vx, vy), config, |_| {});
        let peak = vx.abs().max(vy.abs());
        let bound = if peak < config.epsilon {
            0.0
        } else {
            ((config.epsilon / peak).ln() / damping.ln()).ceil() + 1.0
        };
        prop_assert!((steps as f64) <= bound, "{steps} > {bound}");
    }
}
