// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use glam::DVec3;
use hashbrown::{HashMap, HashSet};

use crate::config::LayoutConfig;
use crate::error::UnknownNode;
use crate::model::{Edge, Node};

/// World position of every node, keyed by node id.
pub type WorldPositions<K> = HashMap<K, DVec3>;

/// Authoritative world positions for a node set.
///
/// The store holds exactly one position per node of the active node set.
/// Positions start at the [`LayoutConfig`] transform of each node's
/// `source_position` and are then moved by drags, either one node at a time or
/// as a rigid group.
///
/// A revision counter bumps on every applied mutation so hosts can cheaply
/// detect whether they need to re-upload positions to their renderer.
#[derive(Clone, Debug)]
pub struct PositionStore<K> {
    config: LayoutConfig,
    positions: WorldPositions<K>,
    revision: u64,
}

impl<K> Default for PositionStore<K> {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            positions: HashMap::new(),
            revision: 0,
        }
    }
}

impl<K> PositionStore<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates an empty store using `config` for initial placement.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            positions: HashMap::new(),
            revision: 0,
        }
    }

    /// Creates a store and places every node of `nodes`.
    #[must_use]
    pub fn from_nodes(config: LayoutConfig, nodes: &[Node<K>]) -> Self {
        let mut store = Self::new(config);
        store.initialize(nodes);
        store
    }

    /// Returns the placement configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces all positions with the initial layout of `nodes`.
    ///
    /// This is deterministic: identical input always yields identical
    /// positions, regardless of prior state.
    pub fn initialize(&mut self, nodes: &[Node<K>]) {
        self.positions.clear();
        self.positions.reserve(nodes.len());
        for node in nodes {
            self.positions
                .insert(node.id.clone(), self.config.place(node.source_position));
        }
        self.bump();
    }

    /// Discards every drag-induced offset by re-running [`Self::initialize`].
    pub fn reset(&mut self, nodes: &[Node<K>]) {
        self.initialize(nodes);
        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = nodes.len(), "layout reset");
    }

    /// Reconciles the store with a new node set.
    ///
    /// Entries for nodes missing from `nodes` are pruned, nodes without an
    /// entry are placed at their initial layout, and surviving nodes keep
    /// their current (possibly dragged) position.
    pub fn sync_nodes(&mut self, nodes: &[Node<K>]) {
        let before = self.positions.len();
        let live: HashSet<&K> = nodes.iter().map(|node| &node.id).collect();
        self.positions.retain(|id, _| live.contains(id));
        let pruned = before - self.positions.len();
        let mut added = 0_usize;
        for node in nodes {
            if !self.positions.contains_key(&node.id) {
                self.positions
                    .insert(node.id.clone(), self.config.place(node.source_position));
                added += 1;
            }
        }
        if pruned > 0 || added > 0 {
            self.bump();
            #[cfg(feature = "tracing")]
            tracing::debug!(pruned, added, "synced node set");
        }
    }

    /// Returns the position of `id`, if present.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<DVec3> {
        self.positions.get(id).copied()
    }

    /// Returns `true` if `id` has a position.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of positioned nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no node is positioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the underlying position map.
    #[must_use]
    pub fn positions(&self) -> &WorldPositions<K> {
        &self.positions
    }

    /// Iterates `(id, position)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, DVec3)> + '_ {
        self.positions.iter().map(|(id, p)| (id, *p))
    }

    /// Moves `id` to `new_pos`.
    ///
    /// Without `group_locked` only `id` changes. With `group_locked` the
    /// delta `new_pos - old_pos` is added to every node, a rigid translation
    /// that preserves the relative layout.
    ///
    /// Returns the applied delta. A non-finite `new_pos` is ignored and
    /// reports a zero delta. When `id` has no position the store is left
    /// untouched and [`UnknownNode`] is returned.
    pub fn move_node(
        &mut self,
        id: &K,
        new_pos: DVec3,
        group_locked: bool,
    ) -> Result<DVec3, UnknownNode<K>> {
        let Some(old) = self.get(id) else {
            return Err(UnknownNode { id: id.clone() });
        };
        if !new_pos.is_finite() {
            return Ok(DVec3::ZERO);
        }
        let delta = new_pos - old;
        if group_locked {
            self.translate_all(delta);
        } else {
            self.positions.insert(id.clone(), new_pos);
            self.bump();
        }
        Ok(delta)
    }

    /// Adds `delta` to every position.
    pub fn translate_all(&mut self, delta: DVec3) {
        if !delta.is_finite() || delta == DVec3::ZERO {
            return;
        }
        for p in self.positions.values_mut() {
            *p += delta;
        }
        self.bump();
    }

    /// Adds `delta` to each listed node, skipping unknown ids.
    ///
    /// Returns how many nodes moved. Ids listed twice move twice.
    pub fn translate_nodes<'a>(&mut self, ids: impl IntoIterator<Item = &'a K>, delta: DVec3) -> usize
    where
        K: 'a,
    {
        if !delta.is_finite() || delta == DVec3::ZERO {
            return 0;
        }
        let mut moved = 0;
        for id in ids {
            if let Some(p) = self.positions.get_mut(id) {
                *p += delta;
                moved += 1;
            }
        }
        if moved > 0 {
            self.bump();
        }
        moved
    }

    /// Copies the current positions, typically at the start of a group drag.
    #[must_use]
    pub fn snapshot(&self) -> WorldPositions<K> {
        self.positions.clone()
    }

    /// Sets every node found in `snapshot` to its snapshot position plus `offset`.
    ///
    /// Nodes added after the snapshot was taken are left where they are, and
    /// snapshot entries for nodes that have since been pruned are ignored.
    /// Returns how many nodes were written.
    pub fn apply_offset_from(&mut self, snapshot: &WorldPositions<K>, offset: DVec3) -> usize {
        if !offset.is_finite() {
            return 0;
        }
        let mut written = 0;
        for (id, base) in snapshot {
            if let Some(p) = self.positions.get_mut(id) {
                *p = *base + offset;
                written += 1;
            }
        }
        if written > 0 {
            self.bump();
        }
        written
    }

    /// Returns the positions of both endpoints of `edge`, or `None` when
    /// either endpoint is missing.
    #[must_use]
    pub fn edge_endpoints(&self, edge: &Edge<K>) -> Option<(DVec3, DVec3)> {
        Some((self.get(&edge.source)?, self.get(&edge.target)?))
    }

    /// Iterates the edges whose endpoints are both positioned, together with
    /// those endpoint positions. Dangling edges are skipped.
    pub fn resolved_edges<'a>(
        &'a self,
        edges: &'a [Edge<K>],
    ) -> impl Iterator<Item = (&'a Edge<K>, DVec3, DVec3)> + 'a {
        edges.iter().filter_map(move |edge| match self.edge_endpoints(edge) {
            Some((a, b)) => Some((edge, a, b)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(edge = ?edge.id, "skipping edge with a missing endpoint");
                None
            }
        })
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
