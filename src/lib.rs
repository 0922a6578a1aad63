//! Cinegraph
//!
//! Relationship graphs from movie datasets: actors who appear together,
//! directors and the leads they keep casting, production companies and the
//! movies they made.
//!
//! # Pipeline
//!
//! - `record`: movie records and dataset parsing
//! - `aggregate`: pair counting and threshold filtering
//! - `graph`: immutable graph snapshots and neighborhood queries
//! - `render`: mapping to the vis-network JSON schema
//! - `config`: YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use cinegraph::{aggregate, AggregatorConfig, EntityId, MovieRecord, Relation};
//!
//! let movies = vec![
//!     MovieRecord::new("First", 100).with_main_cast(["Alice", "Bob"]),
//!     MovieRecord::new("Second", 50).with_main_cast(["Alice"]).with_supporting_cast(["Bob"]),
//! ];
//!
//! let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(2);
//! let graph = aggregate(&movies, &config).unwrap();
//!
//! assert_eq!(graph.edge_count(), 1);
//! let alice = graph.node(&"Alice".into()).unwrap();
//! assert_eq!(alice.aggregate_weight, 150);
//!
//! let hood = graph.neighborhood(&"Bob".into());
//! assert!(hood.neighbors.contains(&EntityId::from("Alice")));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod config;
pub mod graph;
pub mod record;
pub mod render;

// Re-export main types for convenience
pub use aggregate::{
    aggregate, AggregateError, AggregateResult, AggregatorConfig, Namespacing, Pairing, PairTally,
    Relation,
};

pub use graph::{
    CollaborationGraph, Edge, EntityId, GraphError, GraphResult, GraphStatistics, Neighborhood,
    Node, PairKey, Role,
};

pub use record::{load_records, parse_records, MovieRecord, RecordError, RecordResult};

pub use render::{Palette, RenderOptions, VisNetwork};

pub use config::{AppConfig, ConfigError, ConfigResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
