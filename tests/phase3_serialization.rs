//! Phase 3 tests: adjacency export/import, JSON and configuration.

use indexmap::{IndexMap, IndexSet};

use undirected_graph::format::AdjacencySets;
use undirected_graph::graph::UndirectedGraph;
use undirected_graph::types::{GraphConfig, GraphError, MutationPolicy};

fn sample() -> UndirectedGraph<u32, f64> {
    let mut graph = UndirectedGraph::new();
    for n in 1..=4 {
        graph.add_node(n).unwrap();
    }
    graph.add_edge(1, 2, 0.5).unwrap();
    graph.add_edge(2, 3, 1.5).unwrap();
    graph.add_edge(3, 1, 2.0).unwrap();
    graph
}

// ==================== Adjacency Mapping Tests ====================

#[test]
fn test_to_adjacency_sets() {
    let sets = sample().to_adjacency_sets();
    assert_eq!(sets.len(), 4);
    assert_eq!(sets[&1], IndexSet::from([2, 3]));
    assert_eq!(sets[&2], IndexSet::from([1, 3]));
    assert!(sets[&4].is_empty());
}

#[test]
fn test_from_adjacency_sets_tolerates_symmetric_entries() {
    let data = vec![
        ("a", vec!["b", "c"]),
        ("b", vec!["a"]),
        ("c", vec!["a", "a"]),
        ("d", vec![]),
    ];
    let graph: UndirectedGraph<&str, ()> = UndirectedGraph::from_adjacency_sets(data).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains(&"d"));
    assert_eq!(graph.policy(), MutationPolicy::Strict);
    graph.assert_consistent();
}

#[test]
fn test_from_adjacency_sets_rejects_self_loop() {
    let data = vec![(1u32, vec![2u32]), (2, vec![2])];
    let err = UndirectedGraph::<u32, ()>::from_adjacency_sets(data).unwrap_err();
    assert!(matches!(err, GraphError::InvalidEdge(2)));
}

#[test]
fn test_adjacency_sets_round_trip() {
    let mut data: AdjacencySets<u32> = IndexMap::new();
    data.insert(1, IndexSet::from([2, 3]));
    data.insert(2, IndexSet::from([3]));
    data.insert(5, IndexSet::new());

    let graph: UndirectedGraph<u32, ()> =
        UndirectedGraph::from_adjacency_sets(data.clone()).unwrap();
    let exported = graph.to_adjacency_sets();
    let reimported: UndirectedGraph<u32, ()> =
        UndirectedGraph::from_adjacency_sets(exported).unwrap();
    assert_eq!(graph, reimported);
    assert_eq!(reimported.edge_count(), 3);
}

#[test]
fn test_adjacency_map_round_trip_keeps_payloads() {
    let graph = sample();
    let map = graph.to_adjacency_map();
    assert_eq!(map[&1][&2], 0.5);
    assert_eq!(map[&2][&1], 0.5);

    let rebuilt = UndirectedGraph::from_adjacency_map(map).unwrap();
    assert_eq!(rebuilt, graph);
}

#[test]
fn test_export_is_independent() {
    let mut graph = sample();
    let map = graph.to_adjacency_map();
    graph.remove_node(&1).unwrap();
    assert!(map.contains_key(&1));
    assert_eq!(map[&3].len(), 2);
}

#[test]
fn test_from_adjacency_map_first_payload_wins() {
    let data = vec![(1u32, vec![(2u32, "first")]), (2, vec![(1, "second")])];
    let graph = UndirectedGraph::from_adjacency_map(data).unwrap();
    assert_eq!(graph.edge(&2, &1), Some(&"first"));
    assert_eq!(graph.edge_count(), 1);
}

// ==================== JSON Tests ====================

#[test]
fn test_json_round_trip() {
    let graph = sample();
    let json = graph.to_json().unwrap();
    let decoded: UndirectedGraph<u32, f64> = UndirectedGraph::from_json(&json).unwrap();
    assert_eq!(decoded, graph);
    decoded.assert_consistent();
}

#[test]
fn test_serde_json_with_string_nodes() {
    let graph = UndirectedGraph::from_edges([("x".to_string(), "y".to_string(), 3u8)]).unwrap();
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(value, serde_json::json!({"x": {"y": 3}, "y": {"x": 3}}));

    let decoded: UndirectedGraph<String, u8> = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, graph);
}

#[test]
fn test_json_restores_symmetry() {
    let decoded: UndirectedGraph<String, u8> =
        UndirectedGraph::from_json(r#"{"a": {"b": 1}, "c": {}}"#).unwrap();
    assert_eq!(decoded.edge(&"b".to_string(), &"a".to_string()), Some(&1));
    assert_eq!(decoded.node_count(), 3);
}

#[test]
fn test_json_errors() {
    let err = UndirectedGraph::<u32, u8>::from_json("not json").unwrap_err();
    assert_eq!(err.kind(), "json");

    let err = UndirectedGraph::<u32, u8>::from_json(r#"{"1": {"1": 0}}"#).unwrap_err();
    assert!(matches!(err, GraphError::InvalidEdge(1)));

    let res: Result<UndirectedGraph<u32, u8>, _> = serde_json::from_str(r#"{"1": {"1": 0}}"#);
    assert!(res.is_err());
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults_to_strict() {
    assert_eq!(GraphConfig::default().policy, MutationPolicy::Strict);
    let config = GraphConfig::from_json_str("{}").unwrap();
    assert_eq!(config, GraphConfig::strict());
}

#[test]
fn test_config_json_round_trip() {
    let config = GraphConfig::from_json_str(r#"{"policy": "idempotent"}"#).unwrap();
    assert_eq!(config.policy, MutationPolicy::Idempotent);
    let json = config.to_json_string().unwrap();
    assert_eq!(GraphConfig::from_json_str(&json).unwrap(), config);
    assert!(GraphConfig::from_json_str(r#"{"policy": "lenient"}"#).is_err());
}

#[test]
fn test_policy_names() {
    assert_eq!(MutationPolicy::from_name("STRICT"), Some(MutationPolicy::Strict));
    assert_eq!(MutationPolicy::from_name("idempotent"), Some(MutationPolicy::Idempotent));
    assert_eq!(MutationPolicy::from_name("other"), None);
    assert_eq!(MutationPolicy::Idempotent.to_string(), "idempotent");
}
