//! Error types for config loading.
//!
//! Invariants:
//! - Variants carry the path or option name needed to diagnose the failure.
//! - Messages NEVER include config file contents or values, which may be secrets.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::JsonKind;

/// Why a config file produced no mapping.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Config file at {path} must contain a JSON object, found {found}")]
    NotAnObject { path: PathBuf, found: JsonKind },

    #[error("JSON path '{json_path}' not found in config file")]
    JsonPathNotFound { json_path: String },

    #[error("JSON path '{json_path}' must point to an object, found {found}")]
    JsonPathNotObject { json_path: String, found: JsonKind },
}

/// Invalid `INIT_ENV_*` option variables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let err = LoadError::NotAnObject {
            path: PathBuf::from("./config.json"),
            found: JsonKind::Array,
        };
        assert_eq!(
            err.to_string(),
            "Config file at ./config.json must contain a JSON object, found array"
        );

        let err = LoadError::JsonPathNotObject {
            json_path: "envs".to_string(),
            found: JsonKind::String,
        };
        assert_eq!(
            err.to_string(),
            "JSON path 'envs' must point to an object, found string"
        );
    }

    #[test]
    fn test_read_error_exposes_io_source() {
        let err = LoadError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let source = std::error::Error::source(&err).expect("io source");
        assert_eq!(source.to_string(), "file not found");
    }
}
