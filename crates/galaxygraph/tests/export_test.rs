//! Integration tests for DOT and JSON export.

use galaxygraph::export::DotOptions;
use galaxygraph::sample::sample_world;
use galaxygraph::GraphStore;

fn triangle() -> GraphStore {
    let mut graph = GraphStore::new();
    graph.add_partition("a").unwrap();
    graph.add_partition("b").unwrap();
    graph.add_node_with_kind("a", "a", Some("BG".to_string())).unwrap();
    graph.add_node("a", "b").unwrap();
    graph.add_node("b", "d").unwrap();
    graph.connect(0, 1, 0.5).unwrap();
    graph.connect(1, 2, 1.0).unwrap();
    graph.connect(0, 2, 2.0).unwrap();
    graph
}

#[test]
fn test_export_dot_structure() {
    let dot = triangle().export_dot().unwrap();

    assert!(dot.starts_with("graph galaxy_graph {\n"));
    assert!(dot.contains("subgraph cluster_a {"));
    assert!(dot.contains("subgraph cluster_b {"));
    assert!(dot.contains("n0 [label=\"a.a\", fillcolor=\"#90CAF9\"];"));
    assert!(dot.contains("n2 [label=\"b.d\", fillcolor=\"#FFFFFF\"];"));
    assert!(dot.contains("n0 -- n1 [label=\"0.5\"];"));
    assert!(dot.contains("n0 -- n2 [label=\"2\"];"));
    assert!(!dot.contains("->"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_export_dot_highlights_path() {
    let graph = triangle();
    let result = graph.shortest_path(0, 2).unwrap();
    let dot = graph
        .export_dot_styled(DotOptions::default().with_highlight(result.path))
        .unwrap();

    assert!(dot.contains("n0 -- n1 [label=\"0.5\", color=\"#E53935\", penwidth=2];"));
    assert!(dot.contains("n1 -- n2 [label=\"1\", color=\"#E53935\", penwidth=2];"));
    assert!(dot.contains("n0 -- n2 [label=\"2\"];"));
    assert!(dot.contains("n1 [label=\"a.b\", fillcolor=\"#FFFFFF\", color=\"#E53935\", penwidth=2];"));
}

#[test]
fn test_export_sample_world() {
    let world = sample_world().unwrap();
    let dot = world.store.export_dot().unwrap();
    assert_eq!(dot.matches("subgraph cluster_").count(), 3);
    assert_eq!(dot.matches(" -- ").count(), 18);
}

#[test]
fn test_export_json_sample_world() {
    let world = sample_world().unwrap();
    let json: serde_json::Value = serde_json::from_str(&world.store.export_json().unwrap()).unwrap();
    assert_eq!(json["partitions"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"].as_array().unwrap().len(), 18);
    assert_eq!(json["partitions"][1]["nodes"][0]["name"], "j");
    assert_eq!(json["partitions"][1]["nodes"][0]["id"], 9);
}
