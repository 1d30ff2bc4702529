// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Layout: node data model and the authoritative position store.
//!
//! A roadmap is a set of [`Node`]s (topics) connected by [`Edge`]s
//! (prerequisites). Each node carries a 2D `source_position` supplied by an
//! external layout; this crate turns those into 3D world positions and keeps
//! them as the single source of truth while the user drags things around.
//!
//! The core type is [`PositionStore`]:
//! - [`PositionStore::initialize`] / [`PositionStore::reset`] place every node
//!   with the [`LayoutConfig`] transform `(x / S - Ox, y / S + Oy, depth)`.
//! - [`PositionStore::move_node`] moves a single node, or, when group-locked,
//!   translates the whole constellation rigidly by the handle's delta.
//! - [`PositionStore::snapshot`] and [`PositionStore::apply_offset_from`]
//!   support group drags whose offsets are relative to the drag start.
//! - [`PositionStore::sync_nodes`] prunes removed nodes and places new ones.
//!
//! It does **not** render anything and does not interpret pointer input;
//! see `orrery_gesture` and `orrery_scene` for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use kurbo::Point;
//! use orrery_layout::{LayoutConfig, Node, PositionStore};
//!
//! let config = LayoutConfig { scale: 1.0, offset_x: 0.0, offset_y: 0.0, depth: 0.0 };
//! let nodes = [
//!     Node::new("a", "Ownership", Point::new(0.0, 0.0)),
//!     Node::new("b", "Borrowing", Point::new(1.0, 0.0)),
//! ];
//! let mut store = PositionStore::from_nodes(config, &nodes);
//!
//! // Group-locked: dragging `a` by (1, 1) carries `b` along.
//! store.move_node(&"a", DVec3::new(1.0, 1.0, 0.0), true).unwrap();
//! assert_eq!(store.get(&"b"), Some(DVec3::new(2.0, 1.0, 0.0)));
//!
//! // Reset discards every drag.
//! store.reset(&nodes);
//! assert_eq!(store.get(&"b"), Some(DVec3::new(1.0, 0.0, 0.0)));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the data model and config.
//! - `tracing`: emit debug events on resets, syncs and skipped edges.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod model;
mod store;

pub use config::LayoutConfig;
pub use error::UnknownNode;
pub use model::{Edge, Node, NodeClass};
pub use store::{PositionStore, WorldPositions};
