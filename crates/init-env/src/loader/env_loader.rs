//! The load pipeline: read, parse, resolve, filter, merge.
//!
//! Invariants:
//! - `read` and `try_load` fail before any environment write.
//! - `load` never fails; errors are logged and yield an empty mapping.
//! - Only keys and counts are logged, never values.

use serde_json::Value;

use super::error::LoadError;
use super::filter::filter_scalars;
use super::merge::merge_entries;
use super::path::resolve_json_path;
use crate::env::EnvStore;
use crate::fs::{ReadFile, SystemFs};
use crate::json::{ParseJson, SerdeJson};
use crate::types::{EnvMap, JsonKind, LoadOptions};

/// Loads JSON config files into environment mappings.
///
/// The file reader and JSON parser are injected so the pipeline can run
/// against in-memory fixtures.
#[derive(Debug, Clone)]
pub struct EnvLoader<F = SystemFs, P = SerdeJson> {
    fs: F,
    parser: P,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(SystemFs, SerdeJson)
    }
}

impl<F: ReadFile, P: ParseJson> EnvLoader<F, P> {
    pub fn new(fs: F, parser: P) -> Self {
        Self { fs, parser }
    }

    /// Read and filter the config without touching any environment.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file cannot be read or parsed, if it is
    /// not a JSON object, or if `json_path` does not resolve to an object.
    pub fn read(&self, options: &LoadOptions) -> Result<EnvMap, LoadError> {
        let path = &options.file_path;

        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;

        let parsed = self.parser.parse(&text).map_err(|e| LoadError::Parse {
            path: path.clone(),
            source: Box::new(e),
        })?;

        let root = match &parsed {
            Value::Object(map) => map,
            other => {
                return Err(LoadError::NotAnObject {
                    path: path.clone(),
                    found: JsonKind::of(other),
                });
            }
        };

        let candidate = match options.json_path.as_deref() {
            Some(json_path) => resolve_json_path(root, json_path)?,
            None => root,
        };

        Ok(filter_scalars(candidate))
    }

    /// Load the config into `env`, returning the error instead of degrading.
    ///
    /// On error `env` is left unchanged.
    pub fn try_load<E: EnvStore + ?Sized>(
        &self,
        env: &mut E,
        options: &LoadOptions,
    ) -> Result<EnvMap, LoadError> {
        let filtered = self.read(options)?;
        let found = filtered.len();
        let outcome = merge_entries(env, filtered, options.overwrite);

        let path = options.file_path.display();
        let json_path = options.json_path.as_deref().unwrap_or("");
        if options.log_to_console {
            tracing::info!(
                path = %path,
                json_path,
                found,
                kept_existing = outcome.kept_existing.len(),
                rejected = outcome.rejected.len(),
                "Loaded environment from config file"
            );
            for key in &outcome.kept_existing {
                tracing::info!(key = %key, "Kept existing environment value");
            }
            for err in &outcome.rejected {
                tracing::warn!(error = %err, "Config entry not written to environment");
            }
        } else {
            tracing::debug!(
                path = %path,
                json_path,
                found,
                kept_existing = outcome.kept_existing.len(),
                rejected = outcome.rejected.len(),
                "Loaded environment from config file"
            );
        }

        Ok(outcome.merged)
    }

    /// Load the config into `env`.
    ///
    /// With `options.overwrite` set, config values replace existing entries.
    /// Without it, existing entries are kept and appear in the result with
    /// their existing value. Any failure (missing file, invalid JSON, wrong
    /// shape, unresolved `json_path`) yields an empty mapping and leaves
    /// `env` unchanged.
    pub fn load<E: EnvStore + ?Sized>(&self, env: &mut E, options: &LoadOptions) -> EnvMap {
        match self.try_load(env, options) {
            Ok(merged) => merged,
            Err(e) => {
                if options.log_to_console {
                    tracing::warn!(error = %e, "Config file not loaded, using empty environment");
                } else {
                    tracing::debug!(error = %e, "Config file not loaded, using empty environment");
                }
                EnvMap::new()
            }
        }
    }
}
