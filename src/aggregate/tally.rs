//! Pair counting over a movie sequence
//!
//! A [`PairTally`] is built once per dataset and relation. Graphs for any
//! threshold are then cut from it, which is what a threshold slider needs:
//! the counts never change, only the filter does.

use super::config::{AggregatorConfig, Namespacing, Pairing, Relation};
use super::{AggregateError, AggregateResult};
use crate::graph::{CollaborationGraph, Edge, EntityId, Node, PairKey, Role};
use crate::record::MovieRecord;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

/// What the tally knows about one entity
#[derive(Debug, Clone)]
struct EntityStats {
    label: String,
    role: Role,
    weight: u64,
}

/// A movie participant after id derivation
struct Participant<'a> {
    id: EntityId,
    name: &'a str,
    role: Role,
}

/// Co-occurrence counts and per-entity weights for one relation
#[derive(Debug, Clone)]
pub struct PairTally {
    config: AggregatorConfig,
    counts: FxHashMap<PairKey, u32>,
    entities: FxHashMap<EntityId, EntityStats>,
    records_seen: usize,
}

impl PairTally {
    /// Count every pair in `records`. The threshold of `config` is not
    /// applied here; see [`PairTally::graph`].
    pub fn build<'a, I>(records: I, config: &AggregatorConfig) -> Self
    where
        I: IntoIterator<Item = &'a MovieRecord>,
    {
        let mut tally = PairTally {
            config: config.clone(),
            counts: FxHashMap::default(),
            entities: FxHashMap::default(),
            records_seen: 0,
        };

        for record in records {
            tally.add_record(record);
        }

        debug!(
            "Tallied {} movies for {}: {} entities, {} distinct pairs",
            tally.records_seen,
            tally.config.relation,
            tally.entities.len(),
            tally.counts.len()
        );
        tally
    }

    fn entity_id(&self, name: &str, role: Role) -> EntityId {
        match self.config.namespacing {
            Namespacing::None => EntityId::new(name),
            Namespacing::PrefixedByRole => EntityId::prefixed(role, name),
        }
    }

    /// Left and right side of a movie, each entity at most once per side
    fn participants<'r>(&self, record: &'r MovieRecord) -> (Vec<Participant<'r>>, Vec<Participant<'r>>) {
        let (left_role, right_role) = self.config.relation.sides();

        let (left_names, right_names): (Vec<&str>, Vec<&str>) = match self.config.relation {
            Relation::CoStar => {
                let leads: Vec<&str> = record
                    .main_cast
                    .iter()
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .collect();
                let supporting = record
                    .cast()
                    .into_iter()
                    .filter(|n| !leads.contains(n))
                    .collect();
                (leads, supporting)
            }
            Relation::DirectorCast => (
                record.director_name().into_iter().collect(),
                record
                    .main_cast
                    .iter()
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .collect(),
            ),
            Relation::ProducerMovie => (
                record
                    .producers
                    .iter()
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .collect(),
                vec![record.title.trim()]
                    .into_iter()
                    .filter(|n| !n.is_empty())
                    .collect(),
            ),
        };

        let side = |names: Vec<&'r str>, role: Role| {
            let mut out: Vec<Participant<'r>> = Vec::with_capacity(names.len());
            for name in names {
                let id = self.entity_id(name, role);
                if !out.iter().any(|p| p.id == id) {
                    out.push(Participant { id, name, role });
                }
            }
            out
        };

        (side(left_names, left_role), side(right_names, right_role))
    }

    fn observe(&mut self, participant: &Participant<'_>) {
        self.entities
            .entry(participant.id.clone())
            .and_modify(|stats| stats.role = stats.role.merge(participant.role))
            .or_insert_with(|| EntityStats {
                label: participant.name.to_string(),
                role: participant.role,
                weight: 0,
            });
    }

    fn bump(&mut self, key: PairKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    fn add_record(&mut self, record: &MovieRecord) {
        self.records_seen += 1;
        let (left, right) = self.participants(record);

        // distinct entities of this movie, roles merged when an id is on both sides
        let mut distinct: Vec<&Participant<'_>> = Vec::with_capacity(left.len() + right.len());
        for p in left.iter().chain(right.iter()) {
            self.observe(p);
            if !distinct.iter().any(|d| d.id == p.id) {
                distinct.push(p);
            }
        }

        if self.config.accumulate_weight {
            for p in &distinct {
                if let Some(stats) = self.entities.get_mut(&p.id) {
                    stats.weight = stats.weight.saturating_add(record.audience_count);
                }
            }
        }

        match self.config.pairing {
            Pairing::Symmetric => {
                for i in 0..distinct.len() {
                    for j in (i + 1)..distinct.len() {
                        let key = PairKey::symmetric(distinct[i].id.clone(), distinct[j].id.clone());
                        self.bump(key);
                    }
                }
            }
            Pairing::Directed => {
                for l in &left {
                    for r in &right {
                        if l.id != r.id {
                            self.bump(PairKey::directed(l.id.clone(), r.id.clone()));
                        }
                    }
                }
            }
        }
    }

    /// Snapshot with every pair counted at least `threshold` times
    pub fn graph(&self, threshold: u32) -> AggregateResult<CollaborationGraph> {
        if threshold == 0 {
            return Err(AggregateError::InvalidThreshold(threshold));
        }

        let edges: Vec<Edge> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count >= threshold)
            .map(|(key, &count)| Edge::from_pair(key.clone(), count))
            .collect();

        let mut connected: FxHashSet<&EntityId> = FxHashSet::default();
        for edge in &edges {
            connected.insert(&edge.a);
            connected.insert(&edge.b);
        }

        let nodes: Vec<Node> = connected
            .into_iter()
            .filter_map(|id| {
                self.entities.get(id).map(|stats| {
                    Node::new(id.clone(), stats.label.clone(), stats.role).with_weight(stats.weight)
                })
            })
            .collect();

        let graph = CollaborationGraph::from_parts(self.config.relation, threshold, nodes, edges)?
            .with_weighted(self.config.accumulate_weight);
        info!(
            "Built {} graph at threshold {}: {} nodes, {} edges",
            self.config.relation,
            threshold,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// How many movies `a` and `b` share under this tally's pairing
    pub fn pair_count(&self, a: &EntityId, b: &EntityId) -> u32 {
        let key = match self.config.pairing {
            Pairing::Symmetric => PairKey::symmetric(a.clone(), b.clone()),
            Pairing::Directed => PairKey::directed(a.clone(), b.clone()),
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Aggregate weight of an entity, 0 when unknown or weights are off
    pub fn weight_of(&self, id: &EntityId) -> u64 {
        self.entities.get(id).map(|s| s.weight).unwrap_or(0)
    }

    /// Highest pair count, the upper end of a useful threshold range
    pub fn max_pair_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of distinct pairs seen
    pub fn pair_total(&self) -> usize {
        self.counts.len()
    }

    pub fn records_seen(&self) -> usize {
        self.records_seen
    }
}
