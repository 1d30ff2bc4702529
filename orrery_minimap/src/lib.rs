// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Minimap: minimap projection and camera frustum primitives.
//!
//! This crate maps between the 3D world of a roadmap scene and a small,
//! fixed-size 2D overview canvas. It focuses on:
//! - Bounding boxes of node positions on a chosen [`ProjectionPlane`].
//! - A uniform, Y-flipped world-to-canvas mapping ([`MinimapProjection`])
//!   and its exact inverse, used to turn minimap clicks into camera targets.
//! - Perspective frustum corners ([`frustum_corners`]) and the camera's
//!   footprint on the layout plane ([`visible_region`]), drawn as the
//!   viewport outline.
//! - A [`CameraRig`] with pan, zoom, retarget, fit-to-bounds and reset.
//! - [`Minimap::build`], which assembles everything a renderer needs for a
//!   frame.
//!
//! It does **not** render. Callers paint [`MinimapFrame`] with whatever
//! backend they use and feed clicks back through
//! [`MinimapFrame::camera_target_for`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use orrery_minimap::MinimapProjection;
//!
//! // Three nodes spanning (0, 0)..(2, 2) in a 200x200 canvas with 20px padding.
//! let bounds = Rect::new(0.0, 0.0, 2.0, 2.0);
//! let proj = MinimapProjection::new(bounds, Size::new(200.0, 200.0), 20.0);
//!
//! // World Y grows upward, canvas Y grows downward.
//! assert_eq!(proj.project(Point::new(2.0, 0.0)), Point::new(180.0, 180.0));
//!
//! // A click maps back into world space.
//! let world = proj.unproject(Point::new(100.0, 100.0));
//! assert!((world - Point::new(1.0, 1.0)).hypot() < 1e-9);
//! ```
//!
//! ## Degenerate input
//!
//! A minimap is redrawn every frame, so a single bad frame must never poison
//! later ones. Zero-extent bounds are grown to a minimum extent, padding
//! larger than the canvas is floored, and camera parameters are passed
//! through [`CameraState::sanitized`] before any trigonometry. None of the
//! functions here return NaN for finite input.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bounds;
mod camera;
pub mod frustum;
mod minimap;
mod modes;
mod palette;
mod projection;

pub use bounds::{bounds_of_points, compute_bounds, with_min_extent};
pub use camera::{CameraBasis, CameraRig, CameraState};
pub use frustum::{Frustum, frustum_corners, plane_corners, visible_region};
pub use minimap::{Minimap, MinimapConfig, MinimapEdge, MinimapFrame, MinimapNode};
pub use modes::{FitMode, ProjectionPlane};
pub use palette::Palette;
pub use projection::{
    DEFAULT_MIN_EXTENT, MinimapProjection, MinimapProjectionDebugInfo, project, unproject,
};
