//! Environment mappings the loader merges into.
//!
//! | Store | Backing | Use |
//! |-------|---------|-----|
//! | [`ProcessEnv`] | `std::env` | production |
//! | [`InMemoryEnv`] | `HashMap` | tests, isolated merges |
//!
//! [`ProcessEnv`] rejects entries the operating system cannot represent
//! (empty keys, keys containing `=`, and keys or values containing NUL) with
//! [`EnvError`], so a malformed config key never panics inside `std::env`.
//! [`InMemoryEnv`] accepts any string key.

mod memory;
mod process;

use thiserror::Error;

pub use memory::InMemoryEnv;
pub use process::ProcessEnv;

/// A string-to-string environment mapping.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. [`ProcessEnv`] mutates process-global
/// state; callers must not write through it from several threads at once.
pub trait EnvStore {
    fn get(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;
}

impl<E: EnvStore + ?Sized> EnvStore for &mut E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        (**self).set(key, value)
    }
}

/// An entry that cannot be stored in an environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid environment variable name: {key:?}")]
    InvalidKey { key: String },

    /// The value itself is never included.
    #[error("value for {key} contains a NUL byte")]
    InvalidValue { key: String },
}
