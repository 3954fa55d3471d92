use super::{EnvError, EnvStore};

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    #[inline]
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        validate_entry(key, value)?;
        // SAFETY: the loader is synchronous and documented as not to be run
        // concurrently with other environment access.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// Reject entries `std::env::set_var` would panic on.
fn validate_entry(key: &str, value: &str) -> Result<(), EnvError> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(EnvError::InvalidKey {
            key: key.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}
