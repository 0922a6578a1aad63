//! Node of a relationship graph

use super::types::{EntityId, Role};
use serde::{Deserialize, Serialize};

/// Audience counts are shown in units of ten million
pub const DISPLAY_WEIGHT_UNIT: f64 = 10_000_000.0;

/// An entity that takes part in at least one emitted edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (possibly role prefixed)
    pub id: EntityId,

    /// Plain display name
    pub label: String,

    /// Highest-precedence role the entity was seen in
    pub role: Role,

    /// Sum of audience counts over every movie the entity appears in
    pub aggregate_weight: u64,
}

impl Node {
    pub fn new(id: impl Into<EntityId>, label: impl Into<String>, role: Role) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            role,
            aggregate_weight: 0,
        }
    }

    pub fn with_weight(mut self, aggregate_weight: u64) -> Self {
        self.aggregate_weight = aggregate_weight;
        self
    }

    pub fn is_lead(&self) -> bool {
        self.role.is_lead()
    }

    /// Aggregate weight in ten-millions, rounded to 2 decimals
    pub fn display_weight(&self) -> f64 {
        let scaled = self.aggregate_weight as f64 / DISPLAY_WEIGHT_UNIT;
        (scaled * 100.0).round() / 100.0
    }
}
