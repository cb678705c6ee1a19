//! Declarative graph descriptions.
//!
//! A [`GraphDescription`] lists partitions with their nodes, followed by
//! edges. Loading replays the records through [`GraphStore`]'s construction
//! calls, so every store invariant is checked exactly as for hand-built
//! graphs.
//!
//! Node records may carry a declared `id`. Declared ids belong to the
//! description, not to the store: the loader maps each one to the id the
//! store assigns, and edge endpoints given as numbers refer to declared ids.

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, NodeId};
use crate::resolver::resolve;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// A complete graph as plain records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Partitions in creation order
    #[serde(default)]
    pub partitions: Vec<PartitionRecord>,
    /// Edges in creation order
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// A partition and its member nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRecord {
    /// Partition name
    pub name: String,
    /// Member nodes in creation order
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

/// A node inside a partition record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node name, unique within the partition
    pub name: String,
    /// Declared id used by numeric edge endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Optional kind tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// An edge between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First endpoint
    pub from: EndpointRef,
    /// Second endpoint
    pub to: EndpointRef,
    /// Traversal cost
    pub cost: f64,
}

/// Reference to an edge endpoint: a declared id or a `partition.node` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointRef {
    /// Declared node id
    Id(u64),
    /// `partition.node` label
    Label(String),
}

impl From<u64> for EndpointRef {
    fn from(value: u64) -> Self {
        EndpointRef::Id(value)
    }
}

impl From<&str> for EndpointRef {
    fn from(value: &str) -> Self {
        EndpointRef::Label(value.to_string())
    }
}

/// A store built from a description, together with the declared id mapping.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    /// The constructed store
    pub store: GraphStore,
    /// Declared id to store id
    pub declared_ids: HashMap<u64, NodeId>,
}

impl LoadedGraph {
    /// Store id for a declared id.
    pub fn declared(&self, id: u64) -> Option<NodeId> {
        self.declared_ids.get(&id).copied()
    }
}

impl NodeRecord {
    /// Node record with a name only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind: None,
        }
    }

    /// Builder pattern: set the declared id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder pattern: set the kind tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl GraphDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GraphError::serialization("Failed to parse graph description", Some(e)))
    }

    /// Parse a description from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| GraphError::serialization("Failed to parse graph description", Some(e)))
    }

    /// Read and parse a JSON description file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::serialization("Failed to serialize graph description", Some(e)))
    }

    /// Describe an existing store. Declared ids equal store ids.
    pub fn from_store(graph: &GraphStore) -> Self {
        let partitions = graph
            .partitions()
            .map(|partition| PartitionRecord {
                name: partition.name.clone(),
                nodes: partition
                    .nodes
                    .iter()
                    .filter_map(|&id| graph.node(id).ok())
                    .map(|node| NodeRecord {
                        name: node.name.clone(),
                        id: Some(node.id),
                        kind: node.kind.clone(),
                    })
                    .collect(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| EdgeRecord {
                from: EndpointRef::Id(edge.a),
                to: EndpointRef::Id(edge.b),
                cost: edge.weight,
            })
            .collect();

        Self { partitions, edges }
    }

    /// Add a partition record and return it for node additions.
    pub fn partition(&mut self, name: impl Into<String>) -> &mut PartitionRecord {
        self.partitions.push(PartitionRecord {
            name: name.into(),
            nodes: Vec::new(),
        });
        let last = self.partitions.len() - 1;
        &mut self.partitions[last]
    }

    /// Add an edge record.
    pub fn edge(&mut self, from: impl Into<EndpointRef>, to: impl Into<EndpointRef>, cost: f64) {
        self.edges.push(EdgeRecord {
            from: from.into(),
            to: to.into(),
            cost,
        });
    }

    /// Build a fresh store from the records.
    ///
    /// # Errors
    ///
    /// Propagates every store error. A declared id used twice is
    /// [`GraphError::InvalidOperation`]; a numeric endpoint that was never
    /// declared is [`GraphError::UnknownNode`]; a label endpoint that doesn't
    /// resolve is [`GraphError::LabelNotFound`].
    pub fn load(&self) -> Result<LoadedGraph> {
        let mut store = GraphStore::new();
        let mut declared_ids = HashMap::new();

        for partition in &self.partitions {
            store.add_partition(partition.name.as_str())?;
            for node in &partition.nodes {
                let id = store.add_node_with_kind(&partition.name, node.name.as_str(), node.kind.clone())?;
                if let Some(declared) = node.id {
                    if declared_ids.insert(declared, id).is_some() {
                        return Err(GraphError::InvalidOperation {
                            message: format!("declared id {declared} is used by more than one node"),
                        });
                    }
                }
            }
        }

        for edge in &self.edges {
            let a = endpoint_id(&store, &declared_ids, &edge.from)?;
            let b = endpoint_id(&store, &declared_ids, &edge.to)?;
            store.connect(a, b, edge.cost)?;
        }

        info!(
            "Loaded graph: {} partitions, {} nodes, {} edges",
            store.partition_count(),
            store.node_count(),
            store.edge_count()
        );

        Ok(LoadedGraph {
            store,
            declared_ids,
        })
    }
}

impl PartitionRecord {
    /// Builder pattern: append a node record.
    pub fn node(&mut self, node: NodeRecord) -> &mut Self {
        self.nodes.push(node);
        self
    }
}

fn endpoint_id(
    store: &GraphStore,
    declared_ids: &HashMap<u64, NodeId>,
    endpoint: &EndpointRef,
) -> Result<NodeId> {
    match endpoint {
        EndpointRef::Id(declared) => declared_ids
            .get(declared)
            .copied()
            .ok_or(GraphError::UnknownNode { node_id: *declared }),
        EndpointRef::Label(label) => resolve(store, label),
    }
}
