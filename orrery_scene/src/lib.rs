// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Scene: a headless roadmap scene with drag, coast and minimap.
//!
//! [`Scene`] composes the other Orrery crates the way an interactive host
//! uses them:
//!
//! - Pointer samples go in through [`Scene::pointer_down`],
//!   [`Scene::pointer_move`] and [`Scene::pointer_up`]. Nodes move one at a
//!   time, edges move both endpoints, and group-locked drags translate the
//!   whole layout relative to a snapshot taken at pointer-down.
//! - A group-locked release with momentum coasts. Each step runs in
//!   [`Scene::on_frame`] for a token handed out by the scene's
//!   [`FrameScheduler`](orrery_gesture::FrameScheduler); starting another
//!   drag withdraws the pending frame.
//! - [`Scene::minimap_frame`] projects nodes, edges and the camera's visible
//!   region, and [`Scene::minimap_click`] turns a click back into a camera
//!   target.
//! - Effects are reported to a [`SceneObserver`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use orrery_gesture::PointerSample;
//! use orrery_layout::Node;
//! use orrery_scene::{DragSubject, Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::default());
//! scene.set_graph(
//!     vec![
//!         Node::new(1, "Ownership", Point::new(0.0, 0.0)),
//!         Node::new(2, "Borrowing", Point::new(100.0, 0.0)),
//!     ],
//!     vec![],
//! );
//!
//! let before = scene.positions().get(&2).unwrap();
//! scene.set_group_locked(true);
//! scene.pointer_down(DragSubject::Node(1), PointerSample::new(Point::new(0.0, 0.0), 0.0));
//! scene.pointer_move(PointerSample::new(Point::new(50.0, 0.0), 16.0), &mut ());
//! scene.pointer_up(PointerSample::new(Point::new(50.0, 0.0), 500.0), &mut ());
//!
//! // Node 2 moved with node 1.
//! assert!(scene.positions().get(&2).unwrap().x > before.x);
//!
//! let frame = scene.minimap_frame().unwrap();
//! assert_eq!(frame.nodes.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod observer;
mod scene;
mod session;

pub use config::SceneConfig;
pub use observer::SceneObserver;
pub use scene::Scene;
pub use session::{DragSession, DragSubject};
