//! # galaxygraph
//!
//! A partitioned, weighted, undirected graph with label lookup and
//! shortest-path queries.
//!
//! ## Concepts
//!
//! - **Galaxy**: a named partition of nodes
//! - **Node**: a vertex named within its galaxy, addressed as `galaxy.node`
//! - **Road**: an undirected edge with a non-negative cost; parallel roads allowed
//!
//! ## Architecture
//!
//! ```text
//! CLI / statement scripts (CREATE ..., FIND ...)
//!     ↓
//! Graph descriptions (declarative records, JSON)
//!     ↓
//! Label resolution + shortest-path queries
//!     ↓
//! GraphStore (partitions, nodes, adjacency)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use galaxygraph::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! graph.add_partition("a").unwrap();
//! let a = graph.add_node("a", "a").unwrap();
//! let b = graph.add_node("a", "b").unwrap();
//! let d = graph.add_node("a", "d").unwrap();
//! graph.connect(a, b, 0.5).unwrap();
//! graph.connect(b, d, 1.0).unwrap();
//! graph.connect(a, d, 2.0).unwrap();
//!
//! let start = graph.resolve("a.a").unwrap();
//! let end = graph.resolve("a.d").unwrap();
//! let result = graph.shortest_path(start, end).unwrap();
//! assert_eq!(result.weight, 1.5);
//! assert_eq!(result.path, vec![a, b, d]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod loader;
pub mod query;
pub mod render;
pub mod resolver;
pub mod sample;
pub mod statement;

// Re-export main types
pub use config::QueryConfig;
pub use error::{GraphError, Result};
pub use graph::{Adjacency, Edge, EdgeId, GraphStore, Node, NodeId, Partition, PathResult};
pub use loader::{EdgeRecord, EndpointRef, GraphDescription, LoadedGraph, NodeRecord, PartitionRecord};
pub use query::{Query, QueryOutcome};
pub use resolver::NodeResolver;
pub use statement::{Script, Statement};
