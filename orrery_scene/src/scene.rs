// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use glam::DVec3;
use kurbo::{Point, Vec2};
use orrery_gesture::{
    DragGesture, FrameQueue, FrameScheduler, FrameToken, GesturePhase, PointerSample,
};
use orrery_layout::{Edge, Node, PositionStore, WorldPositions};
use orrery_minimap::{
    CameraRig, CameraState, Minimap, MinimapConfig, MinimapFrame, compute_bounds,
};

use crate::config::SceneConfig;
use crate::observer::SceneObserver;
use crate::session::{DragSession, DragSubject};

/// A headless roadmap scene.
///
/// `Scene` owns the graph, the [`PositionStore`], a [`CameraRig`], the
/// [`Minimap`] and the drag gesture. Hosts forward pointer samples and frame
/// callbacks to it, and paint [`Self::minimap_frame`] once per frame.
///
/// Screen deltas are converted to world deltas with
/// [`DragConfig::pixels_per_unit`](orrery_gesture::DragConfig::pixels_per_unit)
/// and the minimap's projection plane. Screen Y grows downward, world Y
/// grows upward.
#[derive(Debug)]
pub struct Scene<K, S = FrameQueue> {
    config: SceneConfig,
    nodes: Vec<Node<K>>,
    edges: Vec<Edge<K>>,
    store: PositionStore<K>,
    rig: CameraRig,
    minimap: Minimap,
    group_locked: bool,
    gesture: DragGesture,
    session: Option<DragSession<K>>,
    scheduler: S,
}

impl<K> Scene<K, FrameQueue>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates an empty scene driven by a [`FrameQueue`].
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self::with_scheduler(config, FrameQueue::new())
    }
}

impl<K, S> Scene<K, S>
where
    K: Clone + Eq + Hash + Debug,
    S: FrameScheduler,
{
    /// Creates an empty scene that requests coast frames from `scheduler`.
    #[must_use]
    pub fn with_scheduler(config: SceneConfig, scheduler: S) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
            store: PositionStore::new(config.layout),
            rig: CameraRig::new(config.camera),
            minimap: Minimap::new(config.minimap),
            group_locked: config.group_locked,
            gesture: DragGesture::new(config.drag, config.inertia),
            session: None,
            scheduler,
        }
    }

    /// Returns the configuration the scene was built with.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The current nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// The current edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// The authoritative node positions.
    #[must_use]
    pub fn positions(&self) -> &PositionStore<K> {
        &self.store
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        self.rig.camera()
    }

    /// The camera rig.
    #[must_use]
    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable access to the camera rig, for host camera controls.
    pub fn camera_rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The minimap builder.
    #[must_use]
    pub fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    /// Replaces the minimap configuration.
    pub fn set_minimap_config(&mut self, config: MinimapConfig) {
        self.minimap.set_config(config);
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, for example to drain a [`FrameQueue`].
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Phase of the drag gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Returns `true` if new drags move the whole layout.
    #[must_use]
    pub fn is_group_locked(&self) -> bool {
        self.group_locked
    }

    /// Toggles group lock. A drag already in progress keeps its mode.
    pub fn set_group_locked(&mut self, locked: bool) {
        self.group_locked = locked;
    }

    /// Replaces the graph.
    ///
    /// Positions of surviving nodes are kept, new nodes are placed at their
    /// initial layout and removed nodes are pruned. Any gesture in progress
    /// is cancelled.
    pub fn set_graph(&mut self, nodes: Vec<Node<K>>, edges: Vec<Edge<K>>) {
        self.cancel_gesture();
        self.store.sync_nodes(&nodes);
        self.nodes = nodes;
        self.edges = edges;
    }

    /// Returns every node to its initial layout, cancelling any gesture.
    pub fn reset_layout(&mut self, observer: &mut impl SceneObserver<K>) {
        self.cancel_gesture();
        self.store.reset(&self.nodes);
        observer.positions_changed(self.store.positions());
    }

    /// Abandons the drag or coast in progress.
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel(&mut self.scheduler);
        self.session = None;
    }

    /// Starts dragging `subject` at `sample`.
    ///
    /// A coast in flight is cancelled first. Returns `false`, without
    /// touching any state, when the subject is unknown or, for an edge, has
    /// an endpoint without a position.
    pub fn pointer_down(&mut self, subject: DragSubject<K>, sample: PointerSample) -> bool {
        let Some(subject_start) = self.subject_positions(&subject) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?subject, "ignoring drag of an unknown subject");
            return false;
        };
        let snapshot = self.group_locked.then(|| self.store.snapshot());
        self.gesture.pointer_down(sample, &mut self.scheduler);
        self.session = Some(DragSession::new(subject, sample.position, snapshot, subject_start));
        true
    }

    /// Eases the dragged subject toward the pointer.
    ///
    /// The subject's offset from its pointer-down position moves a
    /// [`DragConfig::smoothing`](orrery_gesture::DragConfig::smoothing)
    /// fraction of the way toward the pointer's offset from where the drag
    /// started.
    ///
    /// Returns `false` when no drag is in progress.
    pub fn pointer_move(
        &mut self,
        sample: PointerSample,
        observer: &mut impl SceneObserver<K>,
    ) -> bool {
        if self.session.is_none() {
            return false;
        }
        let Some(step) = self.gesture.pointer_move(sample) else {
            return false;
        };
        self.track_pointer(sample.position, step.velocity);
        let alpha = self.config.drag.effective_smoothing();
        let Some(offset) = self
            .session
            .as_ref()
            .map(|s| s.offset + (s.target - s.offset) * alpha)
        else {
            return false;
        };
        self.apply_offset(offset, observer);
        true
    }

    /// Ends the drag.
    ///
    /// The subject snaps to the release position, so it ends exactly where
    /// the pointer put it. Group-locked drags released with enough velocity
    /// start coasting; the coast advances in [`Self::on_frame`]. Returns
    /// `false` when no drag is in progress.
    pub fn pointer_up(
        &mut self,
        sample: PointerSample,
        observer: &mut impl SceneObserver<K>,
    ) -> bool {
        let Some(locked) = self.session.as_ref().map(DragSession::is_group_locked) else {
            return false;
        };
        let release = self.gesture.pointer_up(sample, locked, &mut self.scheduler);
        let velocity = release.map_or(Vec2::ZERO, |r| r.velocity);
        if sample.position.is_finite() {
            self.track_pointer(sample.position, velocity);
        }
        if let Some(target) = self.session.as_ref().map(|s| s.target) {
            self.apply_offset(target, observer);
        }
        self.session = None;
        true
    }

    /// Advances a coast for the frame identified by `token`.
    ///
    /// Returns `true` if positions moved. Tokens that are not the pending
    /// coast frame, including ones withdrawn by a newer drag, are ignored.
    pub fn on_frame(&mut self, token: FrameToken, observer: &mut impl SceneObserver<K>) -> bool {
        let Some(delta) = self.gesture.on_frame(token, &mut self.scheduler) else {
            return false;
        };
        self.store.translate_all(self.screen_to_world(delta));
        observer.positions_changed(self.store.positions());
        true
    }

    /// Projects the layout and the camera's visible region for the minimap.
    ///
    /// Returns `None` when no node is positioned.
    #[must_use]
    pub fn minimap_frame(&self) -> Option<MinimapFrame<K>> {
        self.minimap
            .build(&self.nodes, &self.edges, &self.store, Some(self.rig.camera()))
    }

    /// Re-targets the camera at the world point under a minimap click.
    ///
    /// Clicks outside the canvas, or on an empty minimap, are ignored.
    pub fn minimap_click(
        &mut self,
        click: Point,
        observer: &mut impl SceneObserver<K>,
    ) -> Option<DVec3> {
        let frame = self.minimap_frame()?;
        if !frame.contains(click) {
            return None;
        }
        let target = frame.camera_target_for(click, self.rig.camera().target);
        self.retarget(target, observer);
        Some(target)
    }

    /// Re-targets the camera at node `id`.
    pub fn focus_node(&mut self, id: &K, observer: &mut impl SceneObserver<K>) -> Option<DVec3> {
        let target = self.store.get(id)?;
        self.retarget(target, observer);
        Some(target)
    }

    /// Pans the camera along its screen axes by `delta` world units.
    pub fn pan_camera(&mut self, delta: Vec2) {
        self.rig.pan_by_view(delta);
    }

    /// Dollies the camera toward the target by `factor`.
    pub fn zoom_camera(&mut self, factor: f64) {
        self.rig.zoom_by(factor);
    }

    /// Restores the camera's home pose.
    pub fn reset_camera(&mut self) {
        self.rig.reset();
    }

    /// Frames every positioned node, grown by `margin`.
    ///
    /// Returns `false` when there is nothing to frame.
    pub fn fit_camera(&mut self, margin: f64) -> bool {
        let plane = self.minimap.config().plane;
        let Some(bounds) = compute_bounds(self.store.iter().map(|(_, p)| p), plane) else {
            return false;
        };
        self.rig.fit_bounds(bounds, plane, margin);
        true
    }

    fn retarget(&mut self, target: DVec3, observer: &mut impl SceneObserver<K>) {
        self.rig.retarget(target);
        observer.camera_target_requested(target);
    }

    /// Current positions of the nodes `subject` moves, or `None` when the
    /// subject is unknown or an edge endpoint is unplaced.
    fn subject_positions(&self, subject: &DragSubject<K>) -> Option<WorldPositions<K>> {
        let mut positions = WorldPositions::new();
        match subject {
            DragSubject::Node(id) => {
                positions.insert(id.clone(), self.store.get(id)?);
            }
            DragSubject::Edge(id) => {
                let edge = self.edges.iter().find(|e| &e.id == id)?;
                let (source, target) = self.store.edge_endpoints(edge)?;
                positions.insert(edge.source.clone(), source);
                positions.insert(edge.target.clone(), target);
            }
        }
        Some(positions)
    }

    fn screen_to_world(&self, delta: Vec2) -> DVec3 {
        let ppu = self.config.drag.effective_pixels_per_unit();
        let plane = self.minimap.config().plane;
        plane.lift_delta(Vec2::new(delta.x / ppu, -delta.y / ppu))
    }

    fn track_pointer(&mut self, pointer: Point, velocity: Vec2) {
        let Some(start) = self.session.as_ref().map(|s| s.start_pointer) else {
            return;
        };
        let target = self.screen_to_world(pointer - start);
        if let Some(session) = self.session.as_mut() {
            session.last_pointer = pointer;
            session.velocity = velocity;
            session.target = target;
        }
    }

    fn apply_offset(&mut self, offset: DVec3, observer: &mut impl SceneObserver<K>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if offset == session.offset || !offset.is_finite() {
            return;
        }
        session.offset = offset;
        if self.store.apply_offset_from(session.anchors(), offset) > 0 {
            observer.positions_changed(self.store.positions());
        }
    }
}
