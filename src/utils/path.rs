//! Dotted-path field access over parsed response trees.
//!
//! Supports:
//! - Nested object access (e.g., "location.country.code")
//! - Index segments on arrays (e.g., "results.0.ip")
//!
//! A path that does not resolve is simply absent; nothing here fails.

use serde_json::Value;
use std::borrow::Cow;

/// Splits a dotted path into segments. Empty paths and empty segments yield `None`.
pub fn segments(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

/// A parsed tree that can be queried by dotted path.
pub trait FieldSource {
    /// Value at `path`, or `None` when any segment is missing.
    ///
    /// JSON trees return the value with its native type; XML trees return the
    /// element text as a string.
    fn field(&self, path: &str) -> Option<Cow<'_, Value>>;

    /// Items of the collection at `path`; empty when absent or not a collection.
    fn list(&self, path: &str) -> Vec<Value> {
        match self.field(path).as_deref() {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }
}

impl FieldSource for Value {
    fn field(&self, path: &str) -> Option<Cow<'_, Value>> {
        get_path(self, path).map(Cow::Borrowed)
    }
}

/// Walks `path` through nested JSON objects and arrays.
pub fn get_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in segments(path)? {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(arr) => arr.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
