//! `json_path` resolution.
//!
//! A path that names an existing top-level key is used as that key, even if
//! it contains dots. Otherwise it is split on `.`; object segments are looked
//! up by key and array segments by decimal index.

use serde_json::{Map, Value};

use super::error::LoadError;
use crate::constants::JSON_PATH_SEPARATOR;
use crate::types::JsonKind;

/// Resolve `json_path` within `root` to a nested object.
///
/// # Errors
///
/// - `LoadError::JsonPathNotFound` if any segment is missing or empty.
/// - `LoadError::JsonPathNotObject` if the target is not a JSON object.
pub fn resolve_json_path<'a>(
    root: &'a Map<String, Value>,
    json_path: &str,
) -> Result<&'a Map<String, Value>, LoadError> {
    let target = lookup(root, json_path).ok_or_else(|| LoadError::JsonPathNotFound {
        json_path: json_path.to_string(),
    })?;

    match target {
        Value::Object(map) => Ok(map),
        other => Err(LoadError::JsonPathNotObject {
            json_path: json_path.to_string(),
            found: JsonKind::of(other),
        }),
    }
}

fn lookup<'a>(root: &'a Map<String, Value>, json_path: &str) -> Option<&'a Value> {
    if json_path.is_empty() {
        return None;
    }
    if let Some(value) = root.get(json_path) {
        return Some(value);
    }

    let mut segments = json_path.split(JSON_PATH_SEPARATOR);
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut current = root.get(first)?;

    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }

    Some(current)
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().ok()
    } else {
        None
    }
}
