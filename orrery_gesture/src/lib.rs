// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Gesture: drag tracking, inertial coasting and frame scheduling.
//!
//! This crate turns raw pointer samples into the motion a roadmap scene
//! applies to nodes:
//!
//! - [`drag`]: [`DragTracker`] reports raw and exponentially smoothed deltas
//!   and a velocity in pixels per frame.
//! - [`inertia`]: [`Coast`] decays a release velocity geometrically, one
//!   step per frame; [`apply_inertia`] runs a coast to completion.
//! - [`FrameScheduler`]: the seam between gesture code and the host's
//!   animation-frame mechanism. [`FrameQueue`] is a host-agnostic
//!   implementation for headless hosts and tests.
//! - [`DragGesture`]: the `Idle`/`Dragging`/`Coasting` state machine tying
//!   the three together, including cancellation of a coast when a new drag
//!   begins.
//!
//! Nothing here knows about nodes or world space. Deltas are in screen
//! pixels; callers convert them (see `orrery_scene`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use orrery_gesture::{
//!     DragConfig, DragGesture, FrameQueue, GesturePhase, InertiaConfig, PointerSample,
//! };
//!
//! let mut frames = FrameQueue::new();
//! let mut gesture = DragGesture::new(DragConfig::default(), InertiaConfig::default());
//!
//! gesture.pointer_down(PointerSample::new(Point::new(0.0, 0.0), 0.0), &mut frames);
//! gesture.pointer_move(PointerSample::new(Point::new(30.0, 0.0), 16.0));
//! let release = gesture
//!     .pointer_up(PointerSample::new(Point::new(30.0, 0.0), 20.0), true, &mut frames)
//!     .unwrap();
//! assert!(release.coasting);
//! assert_eq!(gesture.phase(), GesturePhase::Coasting);
//!
//! // Drive the coast until it decays.
//! let mut travelled = 0.0;
//! while !frames.is_empty() {
//!     for token in frames.drain() {
//!         if let Some(delta) = gesture.on_frame(token, &mut frames) {
//!             travelled += delta.x;
//!         }
//!     }
//! }
//! assert!(travelled > 0.0);
//! assert_eq!(gesture.phase(), GesturePhase::Idle);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for samples and configuration.
//! - `tracing`: emit debug events when coasts start, finish or are cancelled.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
mod gesture;
pub mod inertia;
mod scheduler;

pub use drag::{DragConfig, DragRelease, DragStep, DragTracker, NOMINAL_FRAME_MS, PointerSample};
pub use gesture::{DragGesture, GesturePhase, Release};
pub use inertia::{Coast, InertiaConfig, apply_inertia};
pub use scheduler::{FrameQueue, FrameScheduler, FrameToken};
