//! Data types shared by the loader and its callers.
//!
//! Responsibilities:
//! - Describe a load request (`LoadOptions`).
//! - Represent the scalar values that survive filtering (`ScalarValue`, `EnvMap`).
//! - Name the JSON value kinds used in shape errors (`JsonKind`).
//!
//! Does NOT handle:
//! - Reading, parsing or merging (see `loader`).

mod options;
mod scalar;

pub use options::LoadOptions;
pub use scalar::{EnvMap, JsonKind, ScalarValue};
