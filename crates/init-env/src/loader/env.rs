//! `LoadOptions` from option variables.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid booleans return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{ENV_FILE_PATH, ENV_JSON_PATH, ENV_LOG_TO_CONSOLE, ENV_OVERWRITE};
use crate::env::EnvStore;
use crate::types::LoadOptions;

/// Read a variable from `env`, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none<E: EnvStore + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.get(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply `INIT_ENV_*` variables to `options`.
pub(crate) fn apply_env<E: EnvStore + ?Sized>(
    options: &mut LoadOptions,
    env: &E,
) -> Result<(), ConfigError> {
    if let Some(path) = env_var_or_none(env, ENV_FILE_PATH) {
        options.file_path = PathBuf::from(path);
    }
    if let Some(json_path) = env_var_or_none(env, ENV_JSON_PATH) {
        options.json_path = Some(json_path);
    }
    if let Some(overwrite) = env_var_or_none(env, ENV_OVERWRITE) {
        options.overwrite = parse_bool(ENV_OVERWRITE, &overwrite)?;
    }
    if let Some(log) = env_var_or_none(env, ENV_LOG_TO_CONSOLE) {
        options.log_to_console = parse_bool(ENV_LOG_TO_CONSOLE, &log)?;
    }
    Ok(())
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}
