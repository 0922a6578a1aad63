//! Aggregation properties over small hand-built datasets

use cinegraph::{
    aggregate, AggregateError, AggregatorConfig, EntityId, MovieRecord, Namespacing, PairKey,
    PairTally, Relation, Role,
};
use std::collections::BTreeSet;

fn cast(title: &str, audience: u64, names: &[&str]) -> MovieRecord {
    MovieRecord::new(title, audience).with_main_cast(names.iter().copied())
}

fn edge_set(records: &[MovieRecord], threshold: u32) -> BTreeSet<(String, String, u32)> {
    let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(threshold);
    aggregate(records, &config)
        .unwrap()
        .edges()
        .iter()
        .map(|e| (e.a.to_string(), e.b.to_string(), e.weight))
        .collect()
}

fn sample() -> Vec<MovieRecord> {
    vec![
        cast("m1", 10, &["A", "B", "C"]),
        cast("m2", 20, &["A", "B"]),
        cast("m3", 30, &["B", "A", "D"]),
        cast("m4", 40, &["C", "D"]),
        cast("m5", 50, &["D", "C", "A"]),
        cast("m6", 60, &["E"]),
    ]
}

#[test]
fn test_pair_key_is_symmetric() {
    for (x, y) in [("A", "B"), ("Zed", "Amy"), ("Kim-Lee", "Kim")] {
        assert_eq!(
            PairKey::symmetric(x.into(), y.into()),
            PairKey::symmetric(y.into(), x.into())
        );
    }
}

#[test]
fn test_threshold_monotonicity() {
    let records = sample();
    for t1 in 1..5 {
        for t2 in (t1 + 1)..=5 {
            let low = edge_set(&records, t1);
            let high = edge_set(&records, t2);
            assert!(high.is_subset(&low), "edges at {} not within edges at {}", t2, t1);
        }
    }
}

#[test]
fn test_no_isolated_nodes() {
    let records = sample();
    for threshold in 1..=4 {
        let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(threshold);
        let graph = aggregate(&records, &config).unwrap();
        for node in graph.nodes() {
            assert!(
                graph.edges().iter().any(|e| e.touches(&node.id)),
                "{} is isolated at threshold {}",
                node.id,
                threshold
            );
        }
        for edge in graph.edges() {
            assert!(graph.contains(&edge.a));
            assert!(graph.contains(&edge.b));
        }
    }
    // E only ever appears alone
    let graph = aggregate(&records, &AggregatorConfig::default().with_threshold(1)).unwrap();
    assert!(!graph.contains(&"E".into()));
}

#[test]
fn test_aggregate_weights() {
    let records = vec![cast("m1", 100, &["A", "B"]), cast("m2", 50, &["A", "C"])];
    let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(1);
    let graph = aggregate(&records, &config).unwrap();

    let weight = |id: &str| graph.node(&id.into()).map(|n| n.aggregate_weight);
    assert_eq!(weight("A"), Some(150));
    assert_eq!(weight("B"), Some(100));
    assert_eq!(weight("C"), Some(50));
}

#[test]
fn test_threshold_boundary() {
    let records = vec![
        cast("m1", 0, &["A", "B"]),
        cast("m2", 0, &["B", "A"]),
        cast("m3", 0, &["A", "B", "C"]),
    ];

    let at_four = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(4);
    let graph = aggregate(&records, &at_four).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node_count(), 0);

    let at_three = at_four.with_threshold(3);
    let graph = aggregate(&records, &at_three).unwrap();
    assert_eq!(graph.edge_count(), 1);
    let edge = &graph.edges()[0];
    assert_eq!((edge.a.as_str(), edge.b.as_str(), edge.weight), ("A", "B", 3));
}

#[test]
fn test_neighbors() {
    let records = vec![
        cast("m1", 0, &["A", "X"]),
        cast("m2", 0, &["A", "Y"]),
        cast("m3", 0, &["Lonely"]),
    ];
    let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(1);
    let graph = aggregate(&records, &config).unwrap();

    let expected: BTreeSet<EntityId> = ["X", "Y"].into_iter().map(EntityId::from).collect();
    assert_eq!(graph.neighborhood(&"A".into()).neighbors, expected);
    assert!(graph.neighborhood(&"Lonely".into()).neighbors.is_empty());
    assert!(graph.neighborhood(&"Ghost".into()).edges.is_empty());
}

#[test]
fn test_record_order_is_irrelevant() {
    let records = sample();
    let mut reversed = records.clone();
    reversed.reverse();

    for threshold in 1..=3 {
        assert_eq!(edge_set(&records, threshold), edge_set(&reversed, threshold));
    }

    let config = AggregatorConfig::for_relation(Relation::CoStar).with_threshold(1);
    let forward = aggregate(&records, &config).unwrap();
    let backward = aggregate(&reversed, &config).unwrap();
    let weights = |g: &cinegraph::CollaborationGraph| -> Vec<(String, u64)> {
        g.nodes().map(|n| (n.id.to_string(), n.aggregate_weight)).collect()
    };
    assert_eq!(weights(&forward), weights(&backward));
}

#[test]
fn test_tally_reuse_matches_rebuild() {
    let records = sample();
    let config = AggregatorConfig::for_relation(Relation::CoStar);
    let tally = PairTally::build(&records, &config);

    for threshold in 1..=tally.max_pair_count() + 1 {
        let from_tally: Vec<_> = tally.graph(threshold).unwrap().edges().to_vec();
        let rebuilt: Vec<_> = aggregate(&records, &config.clone().with_threshold(threshold))
            .unwrap()
            .edges()
            .to_vec();
        assert_eq!(from_tally, rebuilt);
    }
}

#[test]
fn test_zero_threshold_is_invalid() {
    let records = sample();
    let config = AggregatorConfig::default().with_threshold(0);
    assert_eq!(
        aggregate(&records, &config).unwrap_err(),
        AggregateError::InvalidThreshold(0)
    );
}

#[test]
fn test_director_cast_graph() {
    let records = vec![
        MovieRecord::new("m1", 0).with_director("Bong").with_main_cast(["Song", "Bae"]),
        MovieRecord::new("m2", 0).with_director("Bong").with_main_cast(["Song"]),
        MovieRecord::new("m3", 0).with_director("Park").with_main_cast(["Song"]),
    ];
    let graph = aggregate(&records, &AggregatorConfig::for_relation(Relation::DirectorCast)).unwrap();

    assert_eq!(graph.edge_count(), 1);
    let edge = &graph.edges()[0];
    assert_eq!((edge.a.as_str(), edge.b.as_str(), edge.weight), ("Bong", "Song", 2));
    assert_eq!(graph.node(&"Bong".into()).unwrap().role, Role::Director);
    assert_eq!(graph.node(&"Song".into()).unwrap().role, Role::Lead);
}

#[test]
fn test_namespaced_director_who_acts() {
    let records = vec![
        MovieRecord::new("m1", 0).with_director("Kim").with_main_cast(["Kim", "Lee"]),
        MovieRecord::new("m2", 0).with_director("Kim").with_main_cast(["Kim", "Lee"]),
    ];
    let config = AggregatorConfig::for_relation(Relation::DirectorCast)
        .with_namespacing(Namespacing::PrefixedByRole);
    let graph = aggregate(&records, &config).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.resolve("Kim").len(), 2);
    let hood = graph.neighborhood(&"director:Kim".into());
    let neighbors: Vec<&str> = hood.neighbors.iter().map(|n| n.as_str()).collect();
    assert_eq!(neighbors, vec!["actor:Kim", "actor:Lee"]);
}
