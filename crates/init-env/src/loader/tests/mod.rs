//! Scenario tests for `EnvLoader`.
//!
//! Invariants:
//! - Fixtures live in `MemFs` and merges target `InMemoryEnv`, so these tests
//!   never touch the real file system or process environment.
//! - Log capture serializes on `global_test_lock()`.

use serde_json::Value;

use crate::constants::DEFAULT_FILE_PATH;
use crate::fs::MemFs;
use crate::json::SerdeJson;
use crate::loader::EnvLoader;


/// Loader whose default config file holds `contents`.
pub fn loader_with(contents: &str) -> EnvLoader<MemFs, SerdeJson> {
    EnvLoader::new(MemFs::with_file(DEFAULT_FILE_PATH, contents), SerdeJson)
}

/// Loader whose default config file holds `value` serialized as JSON.
pub fn loader_with_json(value: Value) -> EnvLoader<MemFs, SerdeJson> {
    loader_with(&value.to_string())
}
