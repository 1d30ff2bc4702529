// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

/// Role of a roadmap topic.
///
/// The class does not change layout behavior; it is carried through to the
/// minimap so renderers can pick a color per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NodeClass {
    /// An ordinary topic.
    #[default]
    Default,
    /// An entry point of the roadmap.
    Start,
    /// A top-level pattern.
    Pattern,
    /// A pattern nested under another pattern.
    Subpattern,
}

/// A roadmap topic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<K> {
    /// Unique identifier.
    pub id: K,
    /// Display label.
    pub label: String,
    /// Role of the topic.
    pub class: NodeClass,
    /// Externally supplied 2D layout coordinate.
    ///
    /// This is never mutated by the store and is the target of
    /// [`PositionStore::reset`](crate::PositionStore::reset).
    pub source_position: Point,
}

impl<K> Node<K> {
    /// Creates a node of class [`NodeClass::Default`].
    pub fn new(id: K, label: impl Into<String>, source_position: Point) -> Self {
        Self {
            id,
            label: label.into(),
            class: NodeClass::Default,
            source_position,
        }
    }

    /// Returns this node with its class replaced.
    #[must_use]
    pub fn with_class(mut self, class: NodeClass) -> Self {
        self.class = class;
        self
    }
}

/// A directed prerequisite relationship between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<K> {
    /// Unique identifier.
    pub id: K,
    /// Prerequisite node.
    pub source: K,
    /// Dependent node.
    pub target: K,
    /// Whether renderers should animate this edge.
    pub animated: bool,
}

impl<K> Edge<K> {
    /// Creates a non-animated edge.
    pub fn new(id: K, source: K, target: K) -> Self {
        Self {
            id,
            source,
            target,
            animated: false,
        }
    }

    /// Returns this edge with the `animated` flag set.
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}
