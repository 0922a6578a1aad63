//! Immutable collaboration graph snapshot
//!
//! A snapshot is produced by the aggregator for one relation and one
//! threshold. It owns its nodes and edges and keeps an adjacency index for
//! neighborhood queries.

use super::edge::Edge;
use super::node::Node;
use super::types::EntityId;
use crate::aggregate::Relation;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised when a snapshot would break its invariants
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Edge {a} - {b} references unknown node {missing}")]
    DanglingEdge {
        a: EntityId,
        b: EntityId,
        missing: EntityId,
    },

    #[error("Node {0} has no incident edge")]
    IsolatedNode(EntityId),

    #[error("Edge {a} - {b} has weight {weight}, below threshold {threshold}")]
    BelowThreshold {
        a: EntityId,
        b: EntityId,
        weight: u32,
        threshold: u32,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary numbers for a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub lead_count: usize,
    pub max_edge_weight: u32,
    pub total_aggregate_weight: u64,
}

/// Depth-1 neighborhood of one entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighborhood {
    /// The queried entity, `None` when it is not in the graph
    pub center: Option<EntityId>,
    /// Every edge incident to the center
    pub edges: Vec<Edge>,
    /// Endpoints of those edges, excluding the center
    pub neighbors: BTreeSet<EntityId>,
}

impl Neighborhood {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Center plus neighbors, the set painted by a highlight
    pub fn highlighted(&self) -> BTreeSet<EntityId> {
        let mut ids = self.neighbors.clone();
        if let Some(center) = &self.center {
            ids.insert(center.clone());
        }
        ids
    }
}

/// Weighted relationship graph for one relation at one threshold
///
/// Invariants:
/// - every edge endpoint is a node
/// - every node has at least one incident edge
/// - every edge weight is at least the threshold
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    relation: Relation,
    threshold: u32,

    /// Whether node weights were accumulated
    weighted: bool,

    /// Nodes ordered by id
    nodes: IndexMap<EntityId, Node>,

    /// Edges ordered by (a, b)
    edges: Vec<Edge>,

    /// Node id -> indices into `edges`
    adjacency: FxHashMap<EntityId, Vec<usize>>,
}

impl CollaborationGraph {
    /// Empty graph, what an empty dataset or a too-high threshold yields
    pub fn empty(relation: Relation, threshold: u32) -> Self {
        CollaborationGraph {
            relation,
            threshold,
            weighted: false,
            nodes: IndexMap::new(),
            edges: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }

    /// Assemble a snapshot, checking its invariants
    pub fn from_parts(
        relation: Relation,
        threshold: u32,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> GraphResult<Self> {
        let mut nodes: IndexMap<EntityId, Node> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        nodes.sort_keys();

        let mut edges: Vec<Edge> = edges.into_iter().collect();
        edges.sort_by(|x, y| (&x.a, &x.b).cmp(&(&y.a, &y.b)));

        let mut adjacency: FxHashMap<EntityId, Vec<usize>> = FxHashMap::default();
        for (idx, edge) in edges.iter().enumerate() {
            if edge.weight < threshold {
                return Err(GraphError::BelowThreshold {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                    weight: edge.weight,
                    threshold,
                });
            }
            for end in [&edge.a, &edge.b] {
                if !nodes.contains_key(end) {
                    return Err(GraphError::DanglingEdge {
                        a: edge.a.clone(),
                        b: edge.b.clone(),
                        missing: end.clone(),
                    });
                }
            }
            adjacency.entry(edge.a.clone()).or_default().push(idx);
            if edge.b != edge.a {
                adjacency.entry(edge.b.clone()).or_default().push(idx);
            }
        }

        if let Some(isolated) = nodes.keys().find(|id| !adjacency.contains_key(*id)) {
            return Err(GraphError::IsolatedNode(isolated.clone()));
        }

        Ok(CollaborationGraph {
            relation,
            threshold,
            weighted: false,
            nodes,
            edges,
            adjacency,
        })
    }

    /// Mark the node weights as meaningful, even when they are all 0
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn weighted(&self) -> bool {
        self.weighted
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &EntityId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes that played a leading role somewhere
    pub fn leads(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.is_lead())
    }

    /// Edges incident to a node
    pub fn incident_edges(&self, id: &EntityId) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }

    /// Depth-1 neighborhood of `id`. Unknown ids give an empty result.
    pub fn neighborhood(&self, id: &EntityId) -> Neighborhood {
        if !self.contains(id) {
            return Neighborhood::default();
        }

        let mut edges = Vec::new();
        let mut neighbors = BTreeSet::new();
        for edge in self.incident_edges(id) {
            if let Some(other) = edge.other(id) {
                if other != id {
                    neighbors.insert(other.clone());
                }
            }
            edges.push(edge.clone());
        }

        Neighborhood {
            center: Some(id.clone()),
            edges,
            neighbors,
        }
    }

    /// Resolve a search box entry to node ids
    ///
    /// An exact id match wins. Otherwise every node whose label equals the
    /// trimmed name matches, which covers role-prefixed ids.
    pub fn resolve(&self, name: &str) -> Vec<EntityId> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }

        let exact = EntityId::new(name);
        if self.contains(&exact) {
            return vec![exact];
        }

        self.nodes
            .values()
            .filter(|n| n.label == name)
            .map(|n| n.id.clone())
            .collect()
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            lead_count: self.leads().count(),
            max_edge_weight: self.edges.iter().map(|e| e.weight).max().unwrap_or(0),
            total_aggregate_weight: self
                .nodes
                .values()
                .fold(0u64, |acc, n| acc.saturating_add(n.aggregate_weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Role;

    fn triangle_with_tail() -> CollaborationGraph {
        let nodes = vec![
            Node::new("A", "A", Role::Lead),
            Node::new("B", "B", Role::Supporting),
            Node::new("C", "C", Role::Supporting),
            Node::new("D", "D", Role::Lead),
        ];
        let edges = vec![
            Edge::new("A", "B", 3),
            Edge::new("B", "C", 2),
            Edge::new("A", "C", 5),
            Edge::new("C", "D", 2),
        ];
        CollaborationGraph::from_parts(Relation::CoStar, 2, nodes, edges).unwrap()
    }

    #[test]
    fn test_from_parts_orders_output() {
        let graph = triangle_with_tail();
        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);

        let pairs: Vec<(&str, &str)> = graph
            .edges()
            .iter()
            .map(|e| (e.a.as_str(), e.b.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C"), ("C", "D")]);
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let nodes = vec![Node::new("A", "A", Role::Lead)];
        let edges = vec![Edge::new("A", "B", 2)];
        let err = CollaborationGraph::from_parts(Relation::CoStar, 1, nodes, edges).unwrap_err();
        assert!(matches!(err, GraphError::DanglingEdge { ref missing, .. } if missing.as_str() == "B"));
    }

    #[test]
    fn test_isolated_node_rejected() {
        let nodes = vec![
            Node::new("A", "A", Role::Lead),
            Node::new("B", "B", Role::Lead),
            Node::new("Z", "Z", Role::Lead),
        ];
        let edges = vec![Edge::new("A", "B", 2)];
        let err = CollaborationGraph::from_parts(Relation::CoStar, 1, nodes, edges).unwrap_err();
        assert_eq!(err, GraphError::IsolatedNode("Z".into()));
    }

    #[test]
    fn test_below_threshold_rejected() {
        let nodes = vec![Node::new("A", "A", Role::Lead), Node::new("B", "B", Role::Lead)];
        let edges = vec![Edge::new("A", "B", 1)];
        let err = CollaborationGraph::from_parts(Relation::CoStar, 2, nodes, edges).unwrap_err();
        assert!(matches!(err, GraphError::BelowThreshold { weight: 1, threshold: 2, .. }));
    }

    #[test]
    fn test_neighborhood() {
        let graph = triangle_with_tail();
        let hood = graph.neighborhood(&"C".into());

        assert_eq!(hood.center, Some("C".into()));
        assert_eq!(hood.edges.len(), 3);
        let neighbors: Vec<&str> = hood.neighbors.iter().map(|n| n.as_str()).collect();
        assert_eq!(neighbors, vec!["A", "B", "D"]);
        assert_eq!(hood.highlighted().len(), 4);
    }

    #[test]
    fn test_neighborhood_unknown_is_empty() {
        let graph = triangle_with_tail();
        let hood = graph.neighborhood(&"Nobody".into());
        assert!(hood.is_empty());
        assert!(hood.neighbors.is_empty());
        assert_eq!(hood.center, None);
    }

    #[test]
    fn test_resolve() {
        let nodes = vec![
            Node::new(EntityId::prefixed(Role::Director, "Kim"), "Kim", Role::Director),
            Node::new(EntityId::prefixed(Role::Lead, "Kim"), "Kim", Role::Lead),
            Node::new(EntityId::prefixed(Role::Lead, "Lee"), "Lee", Role::Lead),
        ];
        let edges = vec![
            Edge::new("director:Kim", "actor:Kim", 2),
            Edge::new("director:Kim", "actor:Lee", 2),
        ];
        let graph = CollaborationGraph::from_parts(Relation::DirectorCast, 2, nodes, edges).unwrap();

        assert_eq!(graph.resolve(" actor:Lee "), vec![EntityId::from("actor:Lee")]);
        assert_eq!(graph.resolve("Kim").len(), 2);
        assert!(graph.resolve("   ").is_empty());
        assert!(graph.resolve("Park").is_empty());
    }

    #[test]
    fn test_statistics() {
        let nodes = vec![
            Node::new("A", "A", Role::Lead).with_weight(100),
            Node::new("B", "B", Role::Supporting).with_weight(50),
        ];
        let edges = vec![Edge::new("A", "B", 7)];
        let graph = CollaborationGraph::from_parts(Relation::CoStar, 1, nodes, edges).unwrap();

        let stats = graph.statistics();
        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.lead_count, 1);
        assert_eq!(stats.max_edge_weight, 7);
        assert_eq!(stats.total_aggregate_weight, 150);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CollaborationGraph::empty(Relation::ProducerMovie, 1);
        assert!(graph.is_empty());
        assert_eq!(graph.statistics(), GraphStatistics::default());
    }
}
