//! Failure kinds for the filter pipeline.
//!
//! Every variant is reported as a single stderr line and exits with status 1
//! (`ExitCode::FAILURE`).

use serde_json::Value;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// stdin was not a JSON document (malformed text, empty input, bad UTF-8).
    #[error("Invalid JSON input: {0}")]
    Parse(String),

    /// Valid JSON, but the top level is not an array.
    #[error("Invalid JSON input: expected an array of entries, found {found}")]
    Shape { found: &'static str },

    #[error("failed to {action}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },
}

impl FilterError {
    pub fn shape(value: &Value) -> Self {
        FilterError::Shape {
            found: json_kind(value),
        }
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::Parse(err.to_string())
    }
}

/// Name of the JSON type of `value`, as used in diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
