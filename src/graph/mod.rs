//! Relationship graph data model
//!
//! - Entities (actors, directors, production companies, movies) as nodes
//! - Weighted edges between entities that collaborated often enough
//! - Immutable snapshots with a depth-1 neighborhood query

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::{Node, DISPLAY_WEIGHT_UNIT};
pub use store::{CollaborationGraph, GraphError, GraphResult, GraphStatistics, Neighborhood};
pub use types::{EntityId, PairKey, Role, PAIR_SEPARATOR};
