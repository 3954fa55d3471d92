//! Scalar filtering of the candidate object.
//!
//! Responsibilities:
//! - Keep string, number, boolean and null entries.
//!
//! Invariants:
//! - Filtering is one level deep: object and array values are dropped,
//!   never descended into.
//! - Filtering never fails; an object with no scalars yields an empty mapping.

use serde_json::{Map, Value};

use crate::types::{EnvMap, ScalarValue};

/// Keep the scalar-valued entries of `candidate`.
///
/// Object and array values are dropped without descending into them.
pub fn filter_scalars(candidate: &Map<String, Value>) -> EnvMap {
    candidate
        .iter()
        .filter_map(|(key, value)| ScalarValue::from_json(value).map(|v| (key.clone(), v)))
        .collect()
}
