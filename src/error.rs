//! Error types for the ignition-inline filter.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the only tolerated
//! condition (a file entry without inline contents) never becomes an error.

use crate::exit_codes;
use serde_yaml::Value;
use thiserror::Error;

/// Main error type for filter runs.
///
/// Each variant maps to its own exit code.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Reading standard input or writing standard output failed.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid YAML.
    #[error("failed to parse YAML input: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// A node of the document does not have the shape the filter walks through.
    #[error("{path}: expected {expected}, found {found}")]
    Structure {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The document could not be rendered as JSON.
    #[error("failed to render JSON output: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl FilterError {
    /// Build a [`FilterError::Structure`] describing the node actually found.
    pub fn structure(path: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        FilterError::Structure {
            path: path.into(),
            expected,
            found: kind_of(found),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::Io { .. } => exit_codes::IO_FAILURE,
            FilterError::Parse(_) => exit_codes::PARSE_FAILURE,
            FilterError::Structure { .. } => exit_codes::STRUCTURE_FAILURE,
            FilterError::Serialize(_) => exit_codes::SERIALIZE_FAILURE,
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
