//! JSON export as a loadable graph description.

use crate::loader::GraphDescription;
use crate::{GraphStore, Result};

/// Export the store as a pretty-printed [`GraphDescription`].
///
/// Loading the output yields a store with the same partitions, nodes,
/// ids and edges.
pub fn export_json(graph: &GraphStore) -> Result<String> {
    GraphDescription::from_store(graph).to_json()
}
