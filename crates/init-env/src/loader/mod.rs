//! JSON config loader for environment mappings.
//!
//! Responsibilities:
//! - Read and parse the config file through injected collaborators.
//! - Resolve an optional `json_path` to a nested object.
//! - Filter the candidate object to scalar values and merge them into an `EnvStore`.
//! - Build `LoadOptions` from `INIT_ENV_*` variables.
//!
//! Does NOT handle:
//! - Locating config files (the path is used exactly as given).
//! - Installing a tracing subscriber (left to the host application).
//!
//! Invariants / Assumptions:
//! - `EnvLoader::load` never fails; every `LoadError` degrades to an empty mapping.
//! - The environment is only written after the candidate object has been resolved.
//! - Pre-existing environment values win when `overwrite` is false, both in the
//!   environment and in the returned mapping.

mod env;
mod env_loader;
mod error;
mod filter;
mod merge;
mod path;

#[cfg(test)]
mod tests;

pub(crate) use env::apply_env;
pub use env::env_var_or_none;
pub use env_loader::EnvLoader;
pub use error::{ConfigError, LoadError};
pub use filter::filter_scalars;
pub use merge::merge_into;
pub use path::resolve_json_path;
