//! Core graph types: partitions, nodes, edges, IDs.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node (monotonic counter starting at 0).
pub type NodeId = u64;

/// Unique identifier for an edge (monotonic counter starting at 0).
pub type EdgeId = u64;

/// A named grouping of nodes ("galaxy").
///
/// Members are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// Unique partition name
    pub name: String,
    /// Member node IDs, in creation order
    pub nodes: Vec<NodeId>,
}

impl Partition {
    /// Create an empty partition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }
}

/// An addressable vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (assigned by the store)
    pub id: NodeId,
    /// Owning partition
    pub partition: String,
    /// Name, unique within the partition
    pub name: String,
    /// Optional free-form tag (e.g. "BG")
    pub kind: Option<String>,
}

impl Node {
    /// Create a new node (ID is assigned by the store).
    pub fn new(
        id: NodeId,
        partition: impl Into<String>,
        name: impl Into<String>,
        kind: Option<String>,
    ) -> Self {
        Self {
            id,
            partition: partition.into(),
            name: name.into(),
            kind,
        }
    }

    /// `partition.node` form of this node, using `.` as separator.
    pub fn label(&self) -> String {
        self.label_with('.')
    }

    /// `partition<sep>node` form of this node.
    pub fn label_with(&self, separator: char) -> String {
        format!("{}{}{}", self.partition, separator, self.name)
    }
}

/// An undirected, weighted connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier (assigned by the store)
    pub id: EdgeId,
    /// First endpoint, as given to `connect`
    pub a: NodeId,
    /// Second endpoint, as given to `connect`
    pub b: NodeId,
    /// Traversal cost, finite and non-negative
    pub weight: f64,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(id: EdgeId, a: NodeId, b: NodeId, weight: f64) -> Self {
        Self { id, a, b, weight }
    }
}

/// One directed adjacency entry. Every edge produces one entry per endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency {
    /// Node reached by following the edge
    pub neighbor: NodeId,
    /// Weight of the edge
    pub weight: f64,
    /// Edge record this entry belongs to
    pub edge: EdgeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label() {
        let node = Node::new(3, "a", "d", Some("BG".to_string()));
        assert_eq!(node.label(), "a.d");
        assert_eq!(node.label_with(':'), "a:d");
    }
}
