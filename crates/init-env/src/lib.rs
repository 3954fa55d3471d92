//! Load scalar values from a JSON config file into the environment.
//!
//! The crate reads a JSON document, optionally narrows it to a nested object,
//! keeps only the scalar-valued keys, and merges them into an environment
//! mapping. Pre-existing entries are replaced only when `overwrite` is set.
//!
//! ```no_run
//! use init_env::LoadOptions;
//!
//! let options = LoadOptions::default()
//!     .with_file_path("./config.json")
//!     .with_json_path("envs")
//!     .with_overwrite(false);
//!
//! let loaded = init_env::load(&options);
//! for (key, value) in &loaded {
//!     println!("{key}={}", value.to_env_string());
//! }
//! ```

pub mod constants;
pub mod env;
pub mod fs;
pub mod json;
mod loader;
pub mod types;

pub use env::{EnvError, EnvStore, InMemoryEnv, ProcessEnv};
pub use fs::{ReadFile, SystemFs};
pub use json::{ParseJson, SerdeJson};
pub use loader::{
    ConfigError, EnvLoader, LoadError, env_var_or_none, filter_scalars, merge_into,
    resolve_json_path,
};
pub use types::{EnvMap, JsonKind, LoadOptions, ScalarValue};

#[cfg(any(test, feature = "test-support"))]
pub use fs::MemFs;

/// Load `options.file_path` into the live process environment.
///
/// Uses the real file system and `serde_json`. Every failure yields an empty
/// mapping; see [`EnvLoader::load`] for the precedence rules.
pub fn load(options: &LoadOptions) -> EnvMap {
    EnvLoader::new(SystemFs, SerdeJson).load(&mut ProcessEnv, options)
}
