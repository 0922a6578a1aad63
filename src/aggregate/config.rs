//! Aggregator configuration
//!
//! One parameterized aggregator covers every relationship graph; a
//! [`Relation`] picks the two sides of each movie and a preset for the rest.

use crate::graph::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which entities of a movie are related to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    /// Actors appearing in the same movie (main and supporting cast)
    #[default]
    CoStar,
    /// Director paired with each lead actor of the movie
    DirectorCast,
    /// Production company paired with the movie it made
    ProducerMovie,
}

impl Relation {
    pub const ALL: [Relation; 3] = [
        Relation::CoStar,
        Relation::DirectorCast,
        Relation::ProducerMovie,
    ];

    /// Roles of the left and right side of a movie
    pub fn sides(&self) -> (Role, Role) {
        match self {
            Relation::CoStar => (Role::Lead, Role::Supporting),
            Relation::DirectorCast => (Role::Director, Role::Lead),
            Relation::ProducerMovie => (Role::Producer, Role::Movie),
        }
    }

    pub fn default_pairing(&self) -> Pairing {
        match self {
            Relation::CoStar => Pairing::Symmetric,
            Relation::DirectorCast | Relation::ProducerMovie => Pairing::Directed,
        }
    }

    pub fn default_threshold(&self) -> u32 {
        match self {
            Relation::CoStar => 4,
            Relation::DirectorCast => 2,
            Relation::ProducerMovie => 1,
        }
    }

    /// Only co-star graphs size nodes by audience by default
    pub fn default_accumulate_weight(&self) -> bool {
        matches!(self, Relation::CoStar)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::CoStar => "co-star",
            Relation::DirectorCast => "director-cast",
            Relation::ProducerMovie => "producer-movie",
        };
        write!(f, "{}", name)
    }
}

/// How a movie's participants turn into pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pairing {
    /// Pool both sides, count every unordered pair of distinct entities
    Symmetric,
    /// Count every (left, right) pair, order preserved
    Directed,
}

/// Whether entity ids carry a role prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Namespacing {
    #[default]
    None,
    /// `director:Name`, `actor:Name`, ... so one name can be two nodes
    PrefixedByRole,
}

/// Full aggregator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub relation: Relation,
    pub pairing: Pairing,
    pub namespacing: Namespacing,
    pub accumulate_weight: bool,
    /// Minimum number of shared movies for an edge, at least 1
    pub threshold: u32,
}

impl AggregatorConfig {
    /// Preset matching the relation
    pub fn for_relation(relation: Relation) -> Self {
        AggregatorConfig {
            relation,
            pairing: relation.default_pairing(),
            namespacing: Namespacing::None,
            accumulate_weight: relation.default_accumulate_weight(),
            threshold: relation.default_threshold(),
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn with_namespacing(mut self, namespacing: Namespacing) -> Self {
        self.namespacing = namespacing;
        self
    }

    pub fn with_weights(mut self, accumulate_weight: bool) -> Self {
        self.accumulate_weight = accumulate_weight;
        self
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::for_relation(Relation::default())
    }
}
