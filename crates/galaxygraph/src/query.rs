//! Shortest-path queries between two labels.
//!
//! A query is written `FIND a.a->b.j`; the `FIND` keyword is optional when a
//! query is parsed on its own.
//!
//! # Examples
//!
//! ```
//! use galaxygraph::{GraphStore, Query, QueryConfig};
//!
//! # fn example() -> galaxygraph::Result<()> {
//! let mut graph = GraphStore::new();
//! graph.add_partition("a")?;
//! let a = graph.add_node("a", "a")?;
//! let b = graph.add_node("a", "b")?;
//! graph.connect(a, b, 0.5)?;
//!
//! let outcome = Query::parse("FIND a.a->a.b")?.execute(&graph, &QueryConfig::default())?;
//! assert_eq!(outcome.result.weight, 0.5);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::config::QueryConfig;
use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, NodeId, PathResult};
use crate::resolver::NodeResolver;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// <label> -> <label>, after the optional FIND keyword is stripped
static RE_FIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+?)\s*->\s*(\S+?)\s*;?$").unwrap());

/// A pair of endpoint labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Start label
    pub from: String,
    /// Target label
    pub to: String,
}

/// A query together with the resolved ids and the search result.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// The query that was run
    pub query: Query,
    /// Resolved start node
    pub from: NodeId,
    /// Resolved target node
    pub to: NodeId,
    /// Search result
    pub result: PathResult,
}

impl Query {
    /// Create a query from two labels.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parse `FIND a.a->b.j` (or `a.a->b.j`).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] on line 1 if the text is not a query.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_line(text, 1)
    }

    pub(crate) fn parse_line(text: &str, line: usize) -> Result<Self> {
        let text = text.trim();
        let body = match text.strip_prefix("FIND") {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => text,
        };
        let captures = RE_FIND.captures(body).ok_or_else(|| {
            GraphError::parse(line, format!("expected FIND <label>-><label>, got '{text}'"))
        })?;
        Ok(Self::new(&captures[1], &captures[2]))
    }

    /// Resolve both labels and run the shortest-path search.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LabelNotFound`] if either label doesn't resolve.
    /// An unreachable target is not an error.
    pub fn execute(&self, graph: &GraphStore, config: &QueryConfig) -> Result<QueryOutcome> {
        let resolver = NodeResolver::new(graph).with_separator(config.label_separator);
        let from = resolver.resolve(&self.from)?;
        let to = resolver.resolve(&self.to)?;

        debug!("Running query {} -> {} ({from} -> {to})", self.from, self.to);
        let result = graph.shortest_path(from, to)?;

        Ok(QueryOutcome {
            query: self.clone(),
            from,
            to,
            result,
        })
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FIND {}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_keyword() {
        let query = Query::parse("FIND a.a->b.j").unwrap();
        assert_eq!(query, Query::new("a.a", "b.j"));
    }

    #[test]
    fn test_parse_without_keyword_and_spacing() {
        let query = Query::parse("  a.a  ->  c.s ").unwrap();
        assert_eq!(query, Query::new("a.a", "c.s"));
    }

    #[test]
    fn test_parse_rejects_missing_arrow() {
        assert!(matches!(
            Query::parse("FIND a.a b.j"),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(Query::parse("FIND ->b.j").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let query = Query::new("a.a", "b.j");
        assert_eq!(Query::parse(&query.to_string()).unwrap(), query);
    }
}
