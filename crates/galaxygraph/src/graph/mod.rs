//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Partition`] and [`Node`]: named galaxies and their members
//! - [`Edge`]: undirected weighted connections
//! - [`GraphStore`]: construction and lookup
//! - [`algorithms`]: shortest-path search

mod types;
mod store;
pub mod algorithms;

pub use types::{Adjacency, Edge, EdgeId, Node, NodeId, Partition};
pub use store::GraphStore;
pub use algorithms::PathResult;
