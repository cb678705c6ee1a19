//! DOT format export for Graphviz visualization.
//!
//! Emits an undirected graph with one cluster per galaxy. Edges carry their
//! cost as label; a query path can be highlighted.

use crate::{EdgeId, GraphStore, NodeId, Result};
use log::warn;
use std::collections::{HashMap, HashSet};

/// Node count above which export logs a size warning.
const LARGE_EXPORT_NODES: usize = 10_000;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Node fill colors by kind tag (hex color codes)
    pub kind_colors: HashMap<String, String>,
    /// Fill color for nodes without a configured kind
    pub default_color: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Node sequence to highlight, typically a query result path
    pub highlight_path: Vec<NodeId>,
    /// Color for highlighted nodes and edges
    pub highlight_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        let mut kind_colors = HashMap::new();
        kind_colors.insert("BG".to_string(), "#90CAF9".to_string());
        kind_colors.insert("NON-BG".to_string(), "#E0E0E0".to_string());

        DotOptions {
            kind_colors,
            default_color: "#FFFFFF".to_string(),
            rankdir: "LR".to_string(),
            highlight_path: Vec::new(),
            highlight_color: "#E53935".to_string(),
        }
    }
}

impl DotOptions {
    /// Highlight the given node sequence.
    pub fn with_highlight(mut self, path: Vec<NodeId>) -> Self {
        self.highlight_path = path;
        self
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &GraphStore) -> Result<String> {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &GraphStore, options: DotOptions) -> Result<String> {
    let node_count = graph.node_count();
    if node_count > LARGE_EXPORT_NODES {
        warn!("Exporting large graph ({node_count} nodes) to DOT");
    }

    let highlighted_nodes: HashSet<NodeId> = options.highlight_path.iter().copied().collect();
    let highlighted_edges = path_edges(graph, &options.highlight_path)?;

    let mut output = String::new();

    // Header
    output.push_str("graph galaxy_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for partition in graph.partitions() {
        output.push_str(&format!(
            "    subgraph cluster_{} {{\n",
            cluster_id(&partition.name)
        ));
        output.push_str(&format!(
            "        label=\"{}\";\n",
            escape_dot_label(&partition.name)
        ));

        for &node_id in &partition.nodes {
            let node = graph.node(node_id)?;
            let color = node
                .kind
                .as_ref()
                .and_then(|kind| options.kind_colors.get(kind))
                .unwrap_or(&options.default_color);

            let border = if highlighted_nodes.contains(&node_id) {
                format!(", color=\"{}\", penwidth=2", options.highlight_color)
            } else {
                String::new()
            };

            output.push_str(&format!(
                "        n{node_id} [label=\"{}\", fillcolor=\"{color}\"{border}];\n",
                escape_dot_label(&node.label())
            ));
        }

        output.push_str("    }\n\n");
    }

    for edge in graph.edges() {
        let style = if highlighted_edges.contains(&edge.id) {
            format!(", color=\"{}\", penwidth=2", options.highlight_color)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "    n{} -- n{} [label=\"{}\"{}];\n",
            edge.a, edge.b, edge.weight, style
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Lightest edge between each consecutive pair of `path`.
fn path_edges(graph: &GraphStore, path: &[NodeId]) -> Result<HashSet<EdgeId>> {
    let mut edges = HashSet::new();
    for pair in path.windows(2) {
        let lightest = graph
            .neighbors(pair[0])?
            .iter()
            .filter(|entry| entry.neighbor == pair[1])
            .min_by(|x, y| x.weight.total_cmp(&y.weight));
        if let Some(entry) = lightest {
            edges.insert(entry.edge);
        }
    }
    Ok(edges)
}

/// Restrict a partition name to characters valid in a DOT identifier.
fn cluster_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
