// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Returned when an operation names a node that has no recorded position.
///
/// The store is left untouched when this is returned, so callers that do not
/// care may simply discard it.
#[derive(Clone, PartialEq, Eq)]
pub struct UnknownNode<K> {
    /// The id that was not found.
    pub id: K,
}

impl<K: fmt::Debug> fmt::Debug for UnknownNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnknownNode {{ id: {:?} }}", self.id)
    }
}

impl<K: fmt::Debug> fmt::Display for UnknownNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no position recorded for node {:?}", self.id)
    }
}

impl<K: fmt::Debug> core::error::Error for UnknownNode<K> {}
