//! Statement scripts.
//!
//! A script is one statement per line:
//!
//! ```text
//! CREATE (a: Galaxy)
//! CREATE (a: Node, {id: '0', Type: 'BG'})
//! CREATE (b: Node, {id: '1', Type: 'NON-BG'})
//! CREATE (0) - [:ROAD {cost:0.5}] -> (1)
//! FIND a.a->a.b
//! ```
//!
//! Node statements join the most recently declared galaxy. Road endpoints
//! are declared node ids. Blank lines and lines starting with `//` or `#`
//! are ignored.

use crate::error::{GraphError, Result};
use crate::loader::{EndpointRef, GraphDescription, NodeRecord};
use crate::query::Query;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// CREATE (a: Galaxy)
static RE_GALAXY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CREATE\s*\(\s*(\w+)\s*:\s*Galaxy\s*\)\s*;?$").unwrap());

// CREATE (a: Node, {id: '0', Type: 'BG'})
static RE_NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CREATE\s*\(\s*(\w+)\s*:\s*Node\s*(?:,\s*\{([^}]*)\})?\s*\)\s*;?$").unwrap()
});

// key: 'value' pairs inside a node property block
static RE_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*:\s*'([^']*)'").unwrap());

// CREATE (0) - [:ROAD {cost:0.2}] -> (3)
static RE_ROAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^CREATE\s*\(\s*(\d+)\s*\)\s*-\s*\[\s*:\s*(\w+)\s*\{\s*cost\s*:\s*(-?\d*\.?\d+)\s*\}\s*\]\s*->\s*\(\s*(\d+)\s*\)\s*;?$",
    )
    .unwrap()
});

/// Relation type accepted on road statements.
pub const ROAD_RELATION: &str = "ROAD";

/// One decoded statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `CREATE (a: Galaxy)`
    Galaxy {
        /// Galaxy name
        name: String,
    },
    /// `CREATE (x: Node, {id: 'N', Type: 'T'})`
    Node {
        /// Node name
        name: String,
        /// Declared id
        id: u64,
        /// `Type` property, if present
        kind: Option<String>,
    },
    /// `CREATE (a) - [:ROAD {cost:w}] -> (b)`
    Road {
        /// Declared id of the first endpoint
        from: u64,
        /// Declared id of the second endpoint
        to: u64,
        /// Traversal cost
        cost: f64,
    },
    /// `FIND a.a->b.j`
    Find(Query),
}

impl Statement {
    /// Decode a single statement. `line` is used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if the text matches no statement form,
    /// a node lacks its `id`, or a road uses a relation other than `ROAD`.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let text = text.trim();

        if text.starts_with("FIND") {
            return Query::parse_line(text, line).map(Statement::Find);
        }

        if let Some(captures) = RE_GALAXY.captures(text) {
            return Ok(Statement::Galaxy {
                name: captures[1].to_string(),
            });
        }

        if let Some(captures) = RE_NODE.captures(text) {
            let name = captures[1].to_string();
            let mut id = None;
            let mut kind = None;
            if let Some(block) = captures.get(2) {
                for property in RE_PROPERTY.captures_iter(block.as_str()) {
                    match &property[1] {
                        "id" => {
                            let value = property[2].parse::<u64>().map_err(|_| {
                                GraphError::parse(line, format!("node id '{}' is not a number", &property[2]))
                            })?;
                            id = Some(value);
                        }
                        "Type" => kind = Some(property[2].to_string()),
                        other => debug!("Line {line}: ignoring node property '{other}'"),
                    }
                }
            }
            let id = id.ok_or_else(|| GraphError::parse(line, format!("node '{name}' has no id property")))?;
            return Ok(Statement::Node { name, id, kind });
        }

        if let Some(captures) = RE_ROAD.captures(text) {
            if &captures[2] != ROAD_RELATION {
                return Err(GraphError::parse(
                    line,
                    format!("unsupported relation '{}', expected {ROAD_RELATION}", &captures[2]),
                ));
            }
            let from = parse_id(&captures[1], line)?;
            let cost = captures[3]
                .parse::<f64>()
                .map_err(|_| GraphError::parse(line, format!("cost '{}' is not a number", &captures[3])))?;
            let to = parse_id(&captures[4], line)?;
            return Ok(Statement::Road { from, to, cost });
        }

        Err(GraphError::parse(line, format!("unrecognized statement '{text}'")))
    }
}

fn parse_id(text: &str, line: usize) -> Result<u64> {
    text.parse::<u64>()
        .map_err(|_| GraphError::parse(line, format!("node id '{text}' is out of range")))
}

/// A decoded script: the graph it builds and the queries it asks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    /// Graph built by the CREATE statements
    pub description: GraphDescription,
    /// FIND statements in order
    pub queries: Vec<Query>,
}

impl Script {
    /// Decode a whole script.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] for the first bad line, including a node
    /// statement that appears before any galaxy.
    pub fn parse(text: &str) -> Result<Self> {
        let mut script = Script::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
                continue;
            }

            match Statement::parse(trimmed, line)? {
                Statement::Galaxy { name } => {
                    script.description.partition(name);
                }
                Statement::Node { name, id, kind } => {
                    let partition = script.description.partitions.last_mut().ok_or_else(|| {
                        GraphError::parse(line, format!("node '{name}' declared before any galaxy"))
                    })?;
                    let mut record = NodeRecord::new(name).with_id(id);
                    record.kind = kind;
                    partition.node(record);
                }
                Statement::Road { from, to, cost } => {
                    script
                        .description
                        .edge(EndpointRef::Id(from), EndpointRef::Id(to), cost);
                }
                Statement::Find(query) => script.queries.push(query),
            }
        }

        debug!(
            "Parsed script: {} galaxies, {} roads, {} queries",
            script.description.partitions.len(),
            script.description.edges.len(),
            script.queries.len()
        );
        Ok(script)
    }
}
