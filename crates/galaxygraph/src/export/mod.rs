//! Export module for visualizing graphs in external tools.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization, one cluster per galaxy
//! - **JSON**: the graph description format read by [`crate::loader`]

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
