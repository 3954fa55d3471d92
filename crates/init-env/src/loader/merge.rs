//! Merging filtered config values into an environment.
//!
//! Invariants:
//! - With `overwrite`, every accepted entry is written.
//! - Without it, existing keys are left alone and reported with their
//!   existing value.
//! - Entries the store rejects are not written but are still returned, so
//!   the snapshot matches the filtered config.

use crate::env::{EnvError, EnvStore};
use crate::types::{EnvMap, ScalarValue};

/// What a merge did, entry by entry.
#[derive(Debug, Default)]
pub(crate) struct MergeOutcome {
    /// Snapshot returned to callers.
    pub merged: EnvMap,
    /// Keys whose existing value was kept.
    pub kept_existing: Vec<String>,
    /// Entries the store refused.
    pub rejected: Vec<EnvError>,
}

/// Merge `filtered` into `env` and return the resulting snapshot.
///
/// Keys skipped because `overwrite` is false map to their existing
/// environment value.
pub fn merge_into<E: EnvStore + ?Sized>(env: &mut E, filtered: EnvMap, overwrite: bool) -> EnvMap {
    merge_entries(env, filtered, overwrite).merged
}

pub(crate) fn merge_entries<E: EnvStore + ?Sized>(
    env: &mut E,
    filtered: EnvMap,
    overwrite: bool,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for (key, value) in filtered {
        if !overwrite && let Some(existing) = env.get(&key) {
            outcome.merged.insert(key.clone(), ScalarValue::String(existing));
            outcome.kept_existing.push(key);
            continue;
        }

        match env.set(&key, &value.to_env_string()) {
            Ok(()) => {
                outcome.merged.insert(key, value);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Environment rejected config entry");
                outcome.merged.insert(key, value);
                outcome.rejected.push(e);
            }
        }
    }

    outcome
}
