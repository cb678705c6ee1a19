//! Error types for galaxygraph operations.
//!
//! All fallible operations return [`Result<T>`]. Failures are raised at the
//! offending call and never replaced by sentinel identifiers. An unreachable
//! target is not an error; see [`crate::PathResult`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for galaxygraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for every store, resolver, loader and front-end operation.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A partition with this name already exists
    #[error("Duplicate partition: {name}")]
    DuplicatePartition {
        /// Name that was already taken
        name: String,
    },

    /// No partition with this name exists
    #[error("Unknown partition: {name}")]
    UnknownPartition {
        /// Name that was looked up
        name: String,
    },

    /// A node with this name already exists in the partition
    #[error("Duplicate node '{name}' in partition {partition}")]
    DuplicateNode {
        /// Partition holding the existing node
        partition: String,
        /// Node name that was already taken
        name: String,
    },

    /// No node with this identifier exists
    #[error("Unknown node: {node_id}")]
    UnknownNode {
        /// Identifier that was looked up
        node_id: u64,
    },

    /// Edge weight is negative, NaN or infinite
    #[error("Invalid weight: {weight} (weights must be finite and non-negative)")]
    InvalidWeight {
        /// Rejected weight
        weight: f64,
    },

    /// Label is malformed or names no existing node
    #[error("Label not found: '{label}'")]
    LabelNotFound {
        /// Label as given by the caller
        label: String,
    },

    /// Invalid operation (e.g., empty names, repeated declared ids)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Statement text could not be decoded
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number within the script
        line: usize,
        /// What was wrong with the statement
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a parse error for a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn label_not_found(label: &str) -> Self {
        Self::LabelNotFound {
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_error() {
        let err = GraphError::UnknownNode { node_id: 42 };
        assert_eq!(err.to_string(), "Unknown node: 42");
    }

    #[test]
    fn test_label_not_found_error() {
        let err = GraphError::label_not_found("z.z");
        assert_eq!(err.to_string(), "Label not found: 'z.z'");
    }

    #[test]
    fn test_duplicate_node_error() {
        let err = GraphError::DuplicateNode {
            partition: "a".to_string(),
            name: "b".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate node 'b' in partition a");
    }

    #[test]
    fn test_parse_error() {
        let err = GraphError::parse(7, "expected ROAD relation");
        assert_eq!(err.to_string(), "Parse error on line 7: expected ROAD relation");
    }

    #[test]
    fn test_serialization_error_without_source() {
        let err = GraphError::serialization("bad record", None::<std::io::Error>);
        assert_eq!(err.to_string(), "Serialization error: bad record");
    }
}
