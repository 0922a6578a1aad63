//! Weighted edge between two entities

use super::types::{EntityId, PairKey};
use serde::{Deserialize, Serialize};

/// An edge that met the collaboration threshold
///
/// For directed relations `a` is the source side (director, producer) and
/// `b` the target (actor, movie). For symmetric relations `a <= b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: EntityId,
    pub b: EntityId,

    /// Number of distinct movies the two entities share
    pub weight: u32,
}

impl Edge {
    pub fn new(a: impl Into<EntityId>, b: impl Into<EntityId>, weight: u32) -> Self {
        Edge {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }

    pub fn from_pair(key: PairKey, weight: u32) -> Self {
        Edge {
            a: key.a,
            b: key.b,
            weight,
        }
    }

    /// Check if this edge touches a node
    pub fn touches(&self, id: &EntityId) -> bool {
        &self.a == id || &self.b == id
    }

    /// The endpoint opposite to `id`, if the edge touches it
    pub fn other(&self, id: &EntityId) -> Option<&EntityId> {
        if &self.a == id {
            Some(&self.b)
        } else if &self.b == id {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, x: &EntityId, y: &EntityId) -> bool {
        (&self.a == x && &self.b == y) || (&self.a == y && &self.b == x)
    }
}
