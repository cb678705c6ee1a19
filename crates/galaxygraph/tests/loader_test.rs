//! Integration tests for loading graph descriptions.

use galaxygraph::{EndpointRef, GraphDescription, GraphError, NodeRecord};
use std::io::Write;
use tempfile::NamedTempFile;

const WORLD_JSON: &str = r#"{
    "partitions": [
        {"name": "a", "nodes": [
            {"name": "a", "id": 100, "kind": "BG"},
            {"name": "b", "id": 101},
            {"name": "d", "id": 103}
        ]},
        {"name": "b", "nodes": [
            {"name": "j", "id": 109}
        ]}
    ],
    "edges": [
        {"from": 100, "to": 101, "cost": 0.5},
        {"from": 101, "to": 103, "cost": 1.0},
        {"from": "a.a", "to": "a.d", "cost": 2.0}
    ]
}"#;

#[test]
fn test_load_json_description() {
    let loaded = GraphDescription::from_json(WORLD_JSON).unwrap().load().unwrap();
    let graph = &loaded.store;

    assert_eq!(graph.partition_count(), 2);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);

    // Declared ids map onto store ids assigned from 0
    assert_eq!(loaded.declared(100), Some(0));
    assert_eq!(loaded.declared(103), Some(2));
    assert_eq!(loaded.declared(109), Some(3));
    assert_eq!(loaded.declared(102), None);

    let result = graph.shortest_path(0, 2).unwrap();
    assert_eq!(result.weight, 1.5);
    assert_eq!(result.path, vec![0, 1, 2]);
    assert!(!graph.shortest_path(0, 3).unwrap().is_reachable());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(WORLD_JSON.as_bytes()).unwrap();

    let description = GraphDescription::from_path(file.path()).unwrap();
    assert_eq!(description.partitions.len(), 2);
    assert_eq!(description.edges[2].from, EndpointRef::Label("a.a".to_string()));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GraphDescription::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}

#[test]
fn test_invalid_json() {
    let err = GraphDescription::from_json("{\"partitions\": [").unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));
}

#[test]
fn test_duplicate_declared_id() {
    let mut description = GraphDescription::new();
    description
        .partition("a")
        .node(NodeRecord::new("a").with_id(1))
        .node(NodeRecord::new("b").with_id(1));

    assert!(matches!(
        description.load(),
        Err(GraphError::InvalidOperation { .. })
    ));
}

#[test]
fn test_undeclared_edge_endpoint() {
    let mut description = GraphDescription::new();
    description.partition("a").node(NodeRecord::new("a").with_id(0));
    description.edge(0, 5, 1.0);

    assert!(matches!(
        description.load(),
        Err(GraphError::UnknownNode { node_id: 5 })
    ));
}

#[test]
fn test_unresolved_label_endpoint() {
    let mut description = GraphDescription::new();
    description.partition("a").node(NodeRecord::new("a"));
    description.edge("a.a", "b.a", 1.0);

    assert!(matches!(
        description.load(),
        Err(GraphError::LabelNotFound { .. })
    ));
}

#[test]
fn test_store_errors_propagate() {
    let mut description = GraphDescription::new();
    description.partition("a");
    description.partition("a");
    assert!(matches!(
        description.load(),
        Err(GraphError::DuplicatePartition { .. })
    ));

    let mut description = GraphDescription::new();
    description
        .partition("a")
        .node(NodeRecord::new("a").with_id(0))
        .node(NodeRecord::new("b").with_id(1));
    description.edge(0, 1, -2.0);
    assert!(matches!(
        description.load(),
        Err(GraphError::InvalidWeight { .. })
    ));
}

#[test]
fn test_export_and_reload() {
    let original = GraphDescription::from_json(WORLD_JSON).unwrap().load().unwrap();
    let exported = original.store.export_json().unwrap();
    let reloaded = GraphDescription::from_json(&exported).unwrap().load().unwrap();

    assert_eq!(reloaded.store.node_count(), original.store.node_count());
    assert_eq!(reloaded.store.edge_count(), original.store.edge_count());
    for node in original.store.nodes() {
        assert_eq!(reloaded.store.node(node.id).unwrap(), node);
        assert_eq!(reloaded.declared(node.id), Some(node.id));
    }
    assert_eq!(
        reloaded.store.shortest_path(0, 2).unwrap(),
        original.store.shortest_path(0, 2).unwrap()
    );
}
