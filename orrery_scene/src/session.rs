// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;
use kurbo::{Point, Vec2};
use orrery_layout::WorldPositions;

/// What a drag gesture grabbed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragSubject<K> {
    /// A node, by id.
    Node(K),
    /// An edge, by id. Dragging it moves both endpoints.
    Edge(K),
}

/// State of the drag in progress.
///
/// Created on pointer-down and dropped on pointer-up.
#[derive(Clone, Debug)]
pub struct DragSession<K> {
    /// What is being dragged.
    pub subject: DragSubject<K>,
    /// Pointer position at pointer-down.
    pub start_pointer: Point,
    /// Most recent pointer position.
    pub last_pointer: Point,
    /// Most recent pointer velocity, in pixels per frame.
    pub velocity: Vec2,
    /// Every position at pointer-down, captured only for group-locked drags.
    pub group_snapshot: Option<WorldPositions<K>>,
    /// Positions of the grabbed node, or of both edge endpoints, at pointer-down.
    pub subject_start: WorldPositions<K>,
    /// World offset of the pointer from `start_pointer`.
    pub target: DVec3,
    /// Smoothed world offset currently applied; eases toward `target`.
    pub offset: DVec3,
}

impl<K> DragSession<K> {
    pub(crate) fn new(
        subject: DragSubject<K>,
        pointer: Point,
        group_snapshot: Option<WorldPositions<K>>,
        subject_start: WorldPositions<K>,
    ) -> Self {
        Self {
            subject,
            start_pointer: pointer,
            last_pointer: pointer,
            velocity: Vec2::ZERO,
            group_snapshot,
            subject_start,
            target: DVec3::ZERO,
            offset: DVec3::ZERO,
        }
    }

    /// The positions this drag offsets: every node for a group-locked drag,
    /// otherwise just the subject's.
    #[must_use]
    pub fn anchors(&self) -> &WorldPositions<K> {
        self.group_snapshot.as_ref().unwrap_or(&self.subject_start)
    }

    /// Returns `true` if this drag moves the whole layout.
    #[must_use]
    pub fn is_group_locked(&self) -> bool {
        self.group_snapshot.is_some()
    }
}
