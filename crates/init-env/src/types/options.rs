//! Options for a single load.
//!
//! Invariants:
//! - Unset fields take the defaults in `crate::constants`.
//! - `file_path` is passed to the file reader unchanged; no resolution
//!   against the crate or caller location is performed.

use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::{DEFAULT_FILE_PATH, DEFAULT_LOG_TO_CONSOLE, DEFAULT_OVERWRITE};
use crate::env::EnvStore;
use crate::loader::{ConfigError, apply_env};

/// What to load and how to merge it.
///
/// Deserializes from camelCase JSON (`filePath`, `jsonPath`, `overwrite`,
/// `logToConsole`) with every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadOptions {
    /// JSON file to read.
    pub file_path: PathBuf,
    /// Key, or dotted key path, of the nested object to load.
    pub json_path: Option<String>,
    /// Replace existing environment entries with config values.
    pub overwrite: bool,
    /// Emit load diagnostics at `info`/`warn` instead of `debug`.
    pub log_to_console: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            json_path: None,
            overwrite: DEFAULT_OVERWRITE,
            log_to_console: DEFAULT_LOG_TO_CONSOLE,
        }
    }
}

impl LoadOptions {
    /// Build options from the `INIT_ENV_*` variables in `env`.
    ///
    /// Unset, empty or whitespace-only variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a boolean variable holds
    /// anything other than `true`, `false`, `1` or `0`.
    pub fn from_env<E: EnvStore + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        apply_env(&mut options, env)?;
        Ok(options)
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    pub fn with_json_path(mut self, json_path: impl Into<String>) -> Self {
        self.json_path = Some(json_path.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_log_to_console(mut self, log_to_console: bool) -> Self {
        self.log_to_console = log_to_console;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoadOptions::default();
        assert_eq!(options.file_path, PathBuf::from("./config.json"));
        assert!(options.json_path.is_none());
        assert!(options.overwrite);
        assert!(!options.log_to_console);
    }

    #[test]
    fn test_builder_methods() {
        let options = LoadOptions::default()
            .with_file_path("./test/myfile.json")
            .with_json_path("envs")
            .with_overwrite(false)
            .with_log_to_console(true);

        assert_eq!(options.file_path, PathBuf::from("./test/myfile.json"));
        assert_eq!(options.json_path.as_deref(), Some("envs"));
        assert!(!options.overwrite);
        assert!(options.log_to_console);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let options: LoadOptions =
            serde_json::from_str(r#"{"jsonPath": "envs", "logToConsole": true}"#).unwrap();

        assert_eq!(options.file_path, PathBuf::from("./config.json"));
        assert_eq!(options.json_path.as_deref(), Some("envs"));
        assert!(options.overwrite);
        assert!(options.log_to_console);
    }

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let options: LoadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, LoadOptions::default());
    }
}
