//! Main GraphStore interface for graph construction and lookup.

use super::algorithms::PathResult;
use super::types::{Adjacency, Edge, EdgeId, Node, NodeId, Partition};
use crate::error::{GraphError, Result};
use crate::resolver::DEFAULT_SEPARATOR;
use log::{debug, trace};
use std::collections::HashMap;

/// The partitioned graph.
///
/// `GraphStore` owns partitions, nodes and the adjacency relation. It is
/// built once and then queried; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    // Counters for monotonic ID generation
    node_counter: NodeId,
    edge_counter: EdgeId,
    // Partitions in insertion order plus a name index
    partitions: Vec<Partition>,
    partition_index: HashMap<String, usize>,
    // Node name to ID, one map per entry of `partitions`
    node_index: Vec<HashMap<String, NodeId>>,
    nodes: HashMap<NodeId, Node>,
    edges: Vec<Edge>,
    // Two entries per edge, one for each endpoint
    adjacency: HashMap<NodeId, Vec<Adjacency>>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a partition.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicatePartition`] if the name is taken and
    /// [`GraphError::InvalidOperation`] if it is empty or contains the label
    /// separator.
    pub fn add_partition(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name("partition", &name)?;
        if self.partition_index.contains_key(&name) {
            return Err(GraphError::DuplicatePartition { name });
        }

        debug!("Adding partition: {name}");
        self.partition_index.insert(name.clone(), self.partitions.len());
        self.partitions.push(Partition::new(name));
        self.node_index.push(HashMap::new());
        Ok(())
    }

    /// Add a node to an existing partition.
    ///
    /// # Returns
    ///
    /// The identifier assigned to the node; identifiers count up from 0.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownPartition`] if the partition is absent and
    /// [`GraphError::DuplicateNode`] if the partition already has a node
    /// with this name. A name that is empty or contains the label separator
    /// is [`GraphError::InvalidOperation`].
    pub fn add_node(&mut self, partition: &str, name: impl Into<String>) -> Result<NodeId> {
        self.add_node_with_kind(partition, name, None)
    }

    /// Add a node carrying a kind tag.
    ///
    /// Same contract as [`GraphStore::add_node`].
    pub fn add_node_with_kind(
        &mut self,
        partition: &str,
        name: impl Into<String>,
        kind: Option<String>,
    ) -> Result<NodeId> {
        let name = name.into();
        validate_name("node", &name)?;

        let index = *self
            .partition_index
            .get(partition)
            .ok_or_else(|| GraphError::UnknownPartition {
                name: partition.to_string(),
            })?;

        if self.node_index[index].contains_key(&name) {
            return Err(GraphError::DuplicateNode {
                partition: partition.to_string(),
                name,
            });
        }

        let node_id = self.next_node_id();
        debug!("Adding node: id={node_id}, label={partition}.{name}");
        self.partitions[index].nodes.push(node_id);
        self.node_index[index].insert(name.clone(), node_id);
        self.nodes
            .insert(node_id, Node::new(node_id, partition, name, kind));

        Ok(node_id)
    }

    /// Connect two nodes with an undirected edge.
    ///
    /// Connecting an already connected pair adds a parallel edge.
    ///
    /// # Returns
    ///
    /// The identifier of the new edge record.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is absent and
    /// [`GraphError::InvalidWeight`] if the weight is negative or not finite.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<EdgeId> {
        self.node(a)?;
        self.node(b)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        let edge_id = self.next_edge_id();
        debug!("Connecting: {a} <-> {b}, weight={weight}, edge={edge_id}");

        self.adjacency.entry(a).or_default().push(Adjacency {
            neighbor: b,
            weight,
            edge: edge_id,
        });
        self.adjacency.entry(b).or_default().push(Adjacency {
            neighbor: a,
            weight,
            edge: edge_id,
        });
        self.edges.push(Edge::new(edge_id, a, b, weight));

        Ok(edge_id)
    }

    /// Adjacency entries of a node in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node doesn't exist.
    pub fn neighbors(&self, id: NodeId) -> Result<&[Adjacency]> {
        self.node(id)?;
        Ok(self
            .adjacency
            .get(&id)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[]))
    }

    /// Check whether a node with this identifier exists.
    pub fn node_exists(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node doesn't exist.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or(GraphError::UnknownNode { node_id: id })
    }

    /// `partition.node` label of a node.
    pub fn label(&self, id: NodeId) -> Result<String> {
        Ok(self.node(id)?.label())
    }

    /// Get a partition by name.
    pub fn partition(&self, name: &str) -> Option<&Partition> {
        self.partition_index
            .get(name)
            .map(|&index| &self.partitions[index])
    }

    /// All partitions in insertion order.
    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    /// All nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        (0..self.node_counter).filter_map(move |id| self.nodes.get(&id))
    }

    /// Get an edge record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOperation`] if no such edge exists.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.edges.get(index))
            .ok_or_else(|| GraphError::InvalidOperation {
                message: format!("edge {id} does not exist"),
            })
    }

    /// All edge records in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Look up a node by partition name and node name.
    pub fn find_node(&self, partition: &str, name: &str) -> Option<NodeId> {
        let &index = self.partition_index.get(partition)?;
        self.node_index[index].get(name).copied()
    }

    /// Get the total number of partitions.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // Private helper methods

    fn next_node_id(&mut self) -> NodeId {
        let id = self.node_counter;
        self.node_counter += 1;
        id
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = self.edge_counter;
        self.edge_counter += 1;
        trace!("Allocated edge id {id}");
        id
    }

    // ===== Query Methods =====

    /// Resolve a `partition.node` label to a node identifier.
    ///
    /// See [`crate::resolver::resolve`].
    pub fn resolve(&self, label: &str) -> Result<NodeId> {
        crate::resolver::resolve(self, label)
    }

    /// Find the lowest-weight path between two nodes.
    ///
    /// See [`super::algorithms::shortest_path`].
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult> {
        super::algorithms::shortest_path(self, start, end)
    }

    // ===== Export Methods =====

    /// Export the graph to Graphviz DOT format.
    pub fn export_dot(&self) -> Result<String> {
        crate::export::export_dot(self)
    }

    /// Export the graph to DOT format with custom styling options.
    pub fn export_dot_styled(&self, options: crate::export::DotOptions) -> Result<String> {
        crate::export::export_dot_styled(self, options)
    }

    /// Export the graph as a JSON graph description.
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }
}

fn validate_name(what: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GraphError::InvalidOperation {
            message: format!("{what} name must not be empty"),
        });
    }
    if name.contains(DEFAULT_SEPARATOR) {
        return Err(GraphError::InvalidOperation {
            message: format!("{what} name '{name}' must not contain '{DEFAULT_SEPARATOR}'"),
        });
    }
    Ok(())
}
