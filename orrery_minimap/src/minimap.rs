// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use glam::DVec3;
use kurbo::{Point, Size};
use orrery_layout::{Edge, Node, NodeClass, PositionStore};
use peniko::Color;

use crate::bounds::compute_bounds;
use crate::camera::CameraState;
use crate::frustum::visible_region;
use crate::modes::{FitMode, ProjectionPlane};
use crate::palette::Palette;
use crate::projection::{DEFAULT_MIN_EXTENT, MinimapProjection};

/// Configuration for the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimapConfig {
    /// Canvas size in pixels.
    pub canvas: Size,
    /// Padding around content, in pixels.
    pub padding: f64,
    /// Smallest world extent fitted into the canvas.
    pub min_extent: f64,
    /// World axes the minimap flattens onto.
    pub plane: ProjectionPlane,
    /// Placement of content inside the padded canvas.
    pub fit_mode: FitMode,
    /// Whether the camera's visible region widens the fitted bounds.
    ///
    /// When `false` the outline may extend past the canvas while the
    /// camera looks away from the layout.
    pub include_viewport_in_bounds: bool,
    /// Colors for node classes, edges and the viewport outline.
    pub palette: Palette,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(200.0, 200.0),
            padding: 20.0,
            min_extent: DEFAULT_MIN_EXTENT,
            plane: ProjectionPlane::Front,
            fit_mode: FitMode::AlignMin,
            include_viewport_in_bounds: false,
            palette: Palette::default(),
        }
    }
}

/// A node dot in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapNode<K> {
    /// Node id.
    pub id: K,
    /// Canvas position.
    pub position: Point,
    /// Node class.
    pub class: NodeClass,
    /// Palette color for `class`.
    pub color: Color,
}

/// An edge segment in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapEdge<K> {
    /// Edge id.
    pub id: K,
    /// Canvas position of the source node.
    pub from: Point,
    /// Canvas position of the target node.
    pub to: Point,
    /// Whether the edge is animated.
    pub animated: bool,
}

/// Everything a renderer needs to paint one minimap frame.
#[derive(Clone, Debug)]
pub struct MinimapFrame<K> {
    /// The projection used for this frame.
    pub projection: MinimapProjection,
    /// The plane the frame was flattened onto.
    pub plane: ProjectionPlane,
    /// Positioned nodes, in input order.
    pub nodes: Vec<MinimapNode<K>>,
    /// Resolvable edges, in input order.
    pub edges: Vec<MinimapEdge<K>>,
    /// Outline of the camera's visible region, if a camera was supplied.
    ///
    /// Corners are ordered bottom-left, bottom-right, top-right, top-left
    /// as seen by the camera.
    pub viewport: Option<[Point; 4]>,
}

impl<K> MinimapFrame<K> {
    /// World-space camera target for a click at `click`.
    ///
    /// The planar coordinates come from unprojecting the click; the
    /// coordinate along the plane normal is kept from `current_target`.
    #[must_use]
    pub fn camera_target_for(&self, click: Point, current_target: DVec3) -> DVec3 {
        let world = self.projection.unproject(click);
        self.plane.lift(world, self.plane.depth_of(current_target))
    }

    /// Returns the node whose dot is nearest to `click`, within `radius` pixels.
    ///
    /// A radius that is not a positive finite number hits nothing.
    #[must_use]
    pub fn hit_node(&self, click: Point, radius: f64) -> Option<&MinimapNode<K>> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let limit = radius * radius;
        self.nodes
            .iter()
            .map(|n| (n, (n.position - click).hypot2()))
            .filter(|(_, d2)| *d2 <= limit)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(n, _)| n)
    }

    /// Returns `true` if `point` lies on the canvas.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.projection.canvas_rect().contains(point)
    }
}

/// Builds [`MinimapFrame`]s from positions and an optional camera.
#[derive(Clone, Debug, Default)]
pub struct Minimap {
    config: MinimapConfig,
}

impl Minimap {
    /// Creates a minimap with `config`.
    #[must_use]
    pub fn new(config: MinimapConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: MinimapConfig) {
        self.config = config;
    }

    /// Projects the current layout and camera into a frame.
    ///
    /// Nodes without a position and edges with a missing endpoint are
    /// skipped. Returns `None` when no node is positioned, since there is
    /// nothing to fit the canvas to.
    #[must_use]
    pub fn build<K>(
        &self,
        nodes: &[Node<K>],
        edges: &[Edge<K>],
        store: &PositionStore<K>,
        camera: Option<&CameraState>,
    ) -> Option<MinimapFrame<K>>
    where
        K: Clone + Eq + Hash + Debug,
    {
        let plane = self.config.plane;
        let placed: Vec<(&Node<K>, DVec3)> = nodes
            .iter()
            .filter_map(|n| store.get(&n.id).map(|p| (n, p)))
            .collect();
        if placed.is_empty() {
            return None;
        }

        let region =
            camera.map(|cam| visible_region(cam, plane, plane.depth_of(cam.sanitized().target)));

        let viewport_points = region
            .filter(|_| self.config.include_viewport_in_bounds)
            .into_iter()
            .flatten();
        let bounds = compute_bounds(
            placed.iter().map(|(_, p)| *p).chain(viewport_points),
            plane,
        )?;

        let projection = MinimapProjection::with_options(
            bounds,
            self.config.canvas,
            self.config.padding,
            self.config.min_extent,
            self.config.fit_mode,
        );

        let palette = &self.config.palette;
        let nodes = placed
            .iter()
            .map(|(node, p)| MinimapNode {
                id: node.id.clone(),
                position: projection.project_3d(*p, plane),
                class: node.class,
                color: palette.node_color(node.class),
            })
            .collect();

        let edges = store
            .resolved_edges(edges)
            .map(|(edge, a, b)| MinimapEdge {
                id: edge.id.clone(),
                from: projection.project_3d(a, plane),
                to: projection.project_3d(b, plane),
                animated: edge.animated,
            })
            .collect();

        let viewport = region.map(|corners| corners.map(|c| projection.project_3d(c, plane)));

        Some(MinimapFrame {
            projection,
            plane,
            nodes,
            edges,
            viewport,
        })
    }
}
