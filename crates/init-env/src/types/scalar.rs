//! Scalar JSON values and the mapping they are collected into.
//!
//! Invariants:
//! - A `ScalarValue` is never an object or an array.
//! - The environment string form of a value is stable: strings as-is,
//!   `true`/`false`, `null`, and numbers in JSON notation except that
//!   integral floats drop their fraction (`1.0` is written as `1`).

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Filtered mapping from config key to scalar value, ordered by key.
pub type EnvMap = BTreeMap<String, ScalarValue>;

/// A JSON value that can be stored in an environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl ScalarValue {
    /// Convert a JSON value, returning `None` for objects and arrays.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null => Some(Self::Null),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// The string written into the environment for this value.
    pub fn to_env_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => number_env_string(n),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
        }
    }

    /// Returns the string payload if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Integral floats below 1e21 are written without a fraction, matching how
/// JavaScript stringifies numbers.
fn number_env_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < INTEGRAL_FLOAT_LIMIT => {
            (f as i128).to_string()
        }
        _ => n.to_string(),
    }
}

const INTEGRAL_FLOAT_LIMIT: f64 = 1e21;

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::String(s) => Value::String(s),
            ScalarValue::Number(n) => Value::Number(n),
            ScalarValue::Bool(b) => Value::Bool(b),
            ScalarValue::Null => Value::Null,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_env_string())
    }
}

/// The kind of a JSON value, used to report shape mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}
