//! Text and JSON rendering of query results and the galaxy listing.

use crate::config::QueryConfig;
use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, PathResult};
use crate::query::QueryOutcome;
use serde::Serialize;

/// Serializable summary of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// Start label as written in the query
    pub from: String,
    /// Target label as written in the query
    pub to: String,
    /// Whether a path exists
    pub reachable: bool,
    /// Total weight, null when unreachable
    pub weight: Option<f64>,
    /// Edges on the path, null when unreachable
    pub hops: Option<usize>,
    /// Labels along the path
    pub path: Vec<String>,
}

impl PathReport {
    /// Build a report, mapping path ids back to labels.
    pub fn new(graph: &GraphStore, outcome: &QueryOutcome, config: &QueryConfig) -> Result<Self> {
        Ok(Self {
            from: outcome.query.from.clone(),
            to: outcome.query.to.clone(),
            reachable: outcome.result.is_reachable(),
            weight: outcome.result.is_reachable().then_some(outcome.result.weight),
            hops: outcome.result.hops(),
            path: path_labels(graph, &outcome.result, config)?,
        })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::serialization("Failed to serialize path report", Some(e)))
    }
}

/// Render a result as `a.a->a.d->b.j-> 1.5`.
///
/// Every label is followed by the path separator, then a space and the
/// weight. An unreachable result renders as `unreachable inf`.
pub fn render_path(graph: &GraphStore, result: &PathResult, config: &QueryConfig) -> Result<String> {
    let weight = format_weight(result.weight, config.weight_precision);
    if !result.is_reachable() {
        return Ok(format!("unreachable {weight}"));
    }

    let mut output = String::new();
    for label in path_labels(graph, result, config)? {
        output.push_str(&label);
        output.push_str(&config.path_separator);
    }
    output.push(' ');
    output.push_str(&weight);
    Ok(output)
}

/// List every galaxy and its nodes with their ids.
pub fn render_listing(graph: &GraphStore, config: &QueryConfig) -> Result<String> {
    let mut output = String::new();
    for partition in graph.partitions() {
        output.push_str(&format!("Galaxy {}:\n", partition.name));
        for &id in &partition.nodes {
            let node = graph.node(id)?;
            output.push_str(&format!(
                "  Node {} (ID: {})\n",
                node.label_with(config.label_separator),
                node.id
            ));
        }
        output.push('\n');
    }
    Ok(output)
}

/// Format a weight, `inf` for unreachable.
pub fn format_weight(weight: f64, precision: Option<usize>) -> String {
    if !weight.is_finite() {
        return "inf".to_string();
    }
    match precision {
        Some(precision) => format!("{weight:.precision$}"),
        None => format!("{weight}"),
    }
}

fn path_labels(graph: &GraphStore, result: &PathResult, config: &QueryConfig) -> Result<Vec<String>> {
    result
        .path
        .iter()
        .map(|&id| graph.node(id).map(|node| node.label_with(config.label_separator)))
        .collect()
}
