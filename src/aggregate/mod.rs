//! Pair aggregation and threshold filtering
//!
//! Turns a movie sequence into a [`CollaborationGraph`]:
//! - derive the participants of each movie for the chosen [`Relation`]
//! - count how many movies each pair of entities shares
//! - sum audience counts per entity when weights are enabled
//! - keep the pairs counted at least `threshold` times, and their endpoints

pub mod config;
pub mod tally;

pub use config::{AggregatorConfig, Namespacing, Pairing, Relation};
pub use tally::PairTally;

use crate::graph::{CollaborationGraph, GraphError};
use crate::record::MovieRecord;
use thiserror::Error;

/// Errors raised by aggregation
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    /// Thresholds start at 1; 1 already keeps every pair
    #[error("Invalid threshold {0}: must be at least 1")]
    InvalidThreshold(u32),

    #[error("Graph invariant violated: {0}")]
    Graph(#[from] GraphError),
}

pub type AggregateResult<T> = Result<T, AggregateError>;

/// Build a graph from scratch at `config.threshold`
pub fn aggregate<'a, I>(records: I, config: &AggregatorConfig) -> AggregateResult<CollaborationGraph>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    if config.threshold == 0 {
        return Err(AggregateError::InvalidThreshold(config.threshold));
    }
    PairTally::build(records, config).graph(config.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_rejects_zero_threshold() {
        let config = AggregatorConfig::default().with_threshold(0);
        let records: Vec<MovieRecord> = Vec::new();
        assert_eq!(
            aggregate(&records, &config).unwrap_err(),
            AggregateError::InvalidThreshold(0)
        );
    }

    #[test]
    fn test_aggregate_empty_dataset() {
        let records: Vec<MovieRecord> = Vec::new();
        let graph = aggregate(&records, &AggregatorConfig::default()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.threshold(), 4);
        assert_eq!(graph.relation(), Relation::CoStar);
    }

    #[test]
    fn test_single_actor_movie_has_no_pairs() {
        let records = vec![MovieRecord::new("Solo", 500).with_main_cast(["A"])];
        let config = AggregatorConfig::default().with_threshold(1);
        let graph = aggregate(&records, &config).unwrap();
        assert_eq!(graph.node_count(), 0);
    }
}
