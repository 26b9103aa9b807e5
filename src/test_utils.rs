//! Test helpers for environment-variable isolation.
//!
//! Tests that read or write the `BINDERY_*` variables run concurrently by
//! default; these helpers serialize them and restore the environment
//! afterwards.

use std::env;
use std::sync::Mutex;

/// Serializes every test that touches environment variables.
///
/// Acquire this lock before creating an [`EnvVarGuard`] or calling anything
/// that reads the `BINDERY_*` variables, otherwise concurrent tests observe
/// each other's overrides.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard restoring an environment variable to its prior state on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set `key` to `value`, restoring the prior state when dropped.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove `key`, restoring the prior state when dropped.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
