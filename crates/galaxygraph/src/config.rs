//! Query and rendering configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for label resolution and result rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Separator between partition and node name in labels
    pub label_separator: char,

    /// Text placed after each label when rendering a path
    pub path_separator: String,

    /// Decimal places for rendered weights (None = shortest exact form)
    pub weight_precision: Option<usize>,

    /// Print the galaxy/node listing before query results
    pub list_graph: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            label_separator: '.',
            path_separator: "->".to_string(),
            weight_precision: None,
            list_graph: false,
        }
    }
}

impl QueryConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GraphError::serialization("Failed to parse query config", Some(e)))
    }

    /// Read a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Set the label separator
    pub fn with_label_separator(mut self, separator: char) -> Self {
        self.label_separator = separator;
        self
    }

    /// Set the path separator
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Round rendered weights to a fixed number of decimals
    pub fn with_weight_precision(mut self, precision: usize) -> Self {
        self.weight_precision = Some(precision);
        self
    }

    /// Enable the galaxy/node listing
    pub fn with_listing(mut self, list_graph: bool) -> Self {
        self.list_graph = list_graph;
        self
    }
}
