//! Label resolution.
//!
//! A label names a node as `<partition>.<node>`. Resolution reads the store
//! on every call, so it always reflects the current contents.

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, NodeId};
use log::trace;

/// Default separator between partition and node name.
pub const DEFAULT_SEPARATOR: char = '.';

/// Resolves labels against a borrowed store.
#[derive(Debug, Clone, Copy)]
pub struct NodeResolver<'a> {
    graph: &'a GraphStore,
    separator: char,
}

impl<'a> NodeResolver<'a> {
    /// Create a resolver using the default `.` separator.
    pub fn new(graph: &'a GraphStore) -> Self {
        Self {
            graph,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use a different separator character.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Resolve a label to a node ID.
    ///
    /// Surrounding whitespace is ignored. Each occurrence of the separator
    /// with a non-empty name on both sides is tried in turn, so a custom
    /// separator may also appear inside node or partition names.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LabelNotFound`] if the label is malformed, the
    /// partition doesn't exist, or the partition has no node of that name.
    pub fn resolve(&self, label: &str) -> Result<NodeId> {
        let id = label_splits(label, self.separator)
            .find_map(|(partition, node)| self.graph.find_node(partition, node))
            .ok_or_else(|| GraphError::label_not_found(label))?;
        trace!("Resolved label '{label}' to {id}");
        Ok(id)
    }
}

/// Resolve a `partition.node` label to a node ID.
///
/// # Errors
///
/// See [`NodeResolver::resolve`].
pub fn resolve(graph: &GraphStore, label: &str) -> Result<NodeId> {
    NodeResolver::new(graph).resolve(label)
}

/// Every `(partition, node)` split of a label at one separator occurrence,
/// left to right. Splits with an empty side are skipped.
pub fn label_splits(label: &str, separator: char) -> impl Iterator<Item = (&str, &str)> {
    let label = label.trim();
    label
        .match_indices(separator)
        .map(move |(index, _)| (&label[..index], &label[index + separator.len_utf8()..]))
        .filter(|(partition, node)| !partition.is_empty() && !node.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splits(label: &str, separator: char) -> Vec<(&str, &str)> {
        label_splits(label, separator).collect()
    }

    #[test]
    fn test_label_splits() {
        assert_eq!(splits("a.b", '.'), vec![("a", "b")]);
        assert_eq!(splits("  a.b ", '.'), vec![("a", "b")]);
        assert_eq!(splits("alpha.beta", '.'), vec![("alpha", "beta")]);
        assert_eq!(splits("a:b", ':'), vec![("a", "b")]);
        assert_eq!(splits("a.b.c", '.'), vec![("a", "b.c"), ("a.b", "c")]);
    }

    #[test]
    fn test_label_splits_malformed() {
        assert!(splits("ab", '.').is_empty());
        assert!(splits(".b", '.').is_empty());
        assert!(splits("a.", '.').is_empty());
        assert!(splits("a..", '.').is_empty());
        assert!(splits("", '.').is_empty());
    }

    #[test]
    fn test_resolver_with_separator() {
        let mut graph = GraphStore::new();
        graph.add_partition("a").unwrap();
        let id = graph.add_node("a", "x").unwrap();

        let resolver = NodeResolver::new(&graph).with_separator('/');
        assert_eq!(resolver.resolve("a/x").unwrap(), id);
        assert!(resolver.resolve("a.x").is_err());
    }

    #[test]
    fn test_resolver_separator_inside_names() {
        let mut graph = GraphStore::new();
        graph.add_partition("b:c").unwrap();
        graph.add_partition("a").unwrap();
        let d = graph.add_node("b:c", "d").unwrap();
        let xy = graph.add_node("a", "x:y").unwrap();

        let resolver = NodeResolver::new(&graph).with_separator(':');
        assert_eq!(resolver.resolve("b:c:d").unwrap(), d);
        assert_eq!(resolver.resolve("a:x:y").unwrap(), xy);
        assert!(resolver.resolve("a:x").is_err());
    }
}
