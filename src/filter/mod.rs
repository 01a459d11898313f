//! Dropping the development channel from a version list.
//!
//! An entry is dropped only when it is an object whose `"name"` is exactly
//! [`EXCLUDED_NAME`]. Entries without a name, with a non-string name, or that
//! are not objects at all are kept.

use crate::error::FilterError;
use serde_json::Value;

/// Entries carrying this `"name"` are removed.
pub const EXCLUDED_NAME: &str = "grafana-dev";

pub fn is_excluded(entry: &Value) -> bool {
    entry
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| name == EXCLUDED_NAME)
}

/// Kept entries, cloned, in input order. The input is left untouched.
pub fn filter_entries(entries: &[Value]) -> Vec<Value> {
    entries
        .iter()
        .filter(|entry| !is_excluded(entry))
        .cloned()
        .collect()
}

/// Filter a parsed document; the top level must be an array.
pub fn filter_document(doc: &Value) -> Result<Vec<Value>, FilterError> {
    match doc {
        Value::Array(entries) => Ok(filter_entries(entries)),
        other => Err(FilterError::shape(other)),
    }
}
