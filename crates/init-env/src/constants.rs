//! Centralized defaults for loading options.
//!
//! Keeping them here avoids duplicating literals between `LoadOptions`,
//! the `INIT_ENV_*` option variables, and tests.

// =============================================================================
// Load Option Defaults
// =============================================================================

/// Config file read when no `file_path` is given.
///
/// Handed to the file reader as-is, so it resolves against the process
/// working directory.
pub const DEFAULT_FILE_PATH: &str = "./config.json";

/// Whether config values replace existing environment entries by default.
pub const DEFAULT_OVERWRITE: bool = true;

/// Whether load diagnostics are raised above `debug` by default.
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

// =============================================================================
// Option Variables
// =============================================================================

/// Overrides `LoadOptions::file_path`.
pub const ENV_FILE_PATH: &str = "INIT_ENV_FILE_PATH";

/// Overrides `LoadOptions::json_path`.
pub const ENV_JSON_PATH: &str = "INIT_ENV_JSON_PATH";

/// Overrides `LoadOptions::overwrite`.
pub const ENV_OVERWRITE: &str = "INIT_ENV_OVERWRITE";

/// Overrides `LoadOptions::log_to_console`.
pub const ENV_LOG_TO_CONSOLE: &str = "INIT_ENV_LOG_TO_CONSOLE";

/// Separator between segments of a nested `json_path`.
pub const JSON_PATH_SEPARATOR: char = '.';
