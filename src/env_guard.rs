//! Scoped overrides of process environment variables.
//!
//! [`ScopedEnv`] captures the prior value of a variable, applies an override,
//! and restores the prior value (or removes the variable if it was unset)
//! when dropped. Restoration therefore happens on every exit path: normal
//! return, early `?` return, and panic unwind.

use std::ffi::{OsStr, OsString};
use tracing::debug;

/// RAII guard for a single environment variable override.
#[derive(Debug)]
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ScopedEnv {
    key: OsString,
    previous: Option<OsString>,
}

impl ScopedEnv {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.as_ref().to_os_string();
        let previous = std::env::var_os(&key);
        // SAFETY: mcmod's only other thread is the interrupt handler, which
        // never reads or writes the environment.
        unsafe { std::env::set_var(&key, value.as_ref()) };
        debug!(key = ?key, value = ?value.as_ref(), previous = ?previous, "environment override applied");
        Self { key, previous }
    }

    /// Remove `key` until the guard is dropped.
    #[cfg(test)]
    pub fn unset<K: AsRef<OsStr>>(key: K) -> Self {
        let key = key.as_ref().to_os_string();
        let previous = std::env::var_os(&key);
        // SAFETY: see `ScopedEnv::set`.
        unsafe { std::env::remove_var(&key) };
        Self { key, previous }
    }

    /// The value the variable had before the override, if any.
    pub fn previous(&self) -> Option<&OsStr> {
        self.previous.as_deref()
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        // SAFETY: see `ScopedEnv::set`.
        match &self.previous {
            Some(value) => unsafe { std::env::set_var(&self.key, value) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
        debug!(key = ?self.key, restored = ?self.previous, "environment override reverted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEY: &str = "MCMOD_ENV_GUARD_TEST";

    #[test]
    #[serial]
    fn test_set_restores_previous_value() {
        let _outer = ScopedEnv::set(KEY, "original");
        {
            let guard = ScopedEnv::set(KEY, "override");
            assert_eq!(std::env::var(KEY).unwrap(), "override");
            assert_eq!(guard.previous(), Some(OsStr::new("original")));
        }
        assert_eq!(std::env::var(KEY).unwrap(), "original");
    }

    #[test]
    #[serial]
    fn test_set_on_unset_variable_removes_it_again() {
        let _outer = ScopedEnv::unset(KEY);
        {
            let guard = ScopedEnv::set(KEY, "override");
            assert_eq!(guard.previous(), None);
            assert!(std::env::var_os(KEY).is_some());
        }
        assert!(std::env::var_os(KEY).is_none());
    }

    #[test]
    #[serial]
    fn test_unset_restores_previous_value() {
        let _outer = ScopedEnv::set(KEY, "kept");
        {
            let _guard = ScopedEnv::unset(KEY);
            assert!(std::env::var_os(KEY).is_none());
        }
        assert_eq!(std::env::var(KEY).unwrap(), "kept");
    }

    #[test]
    #[serial]
    fn test_restores_on_panic_unwind() {
        let _outer = ScopedEnv::set(KEY, "before-panic");

        let result = std::panic::catch_unwind(|| {
            let _guard = ScopedEnv::set(KEY, "during-panic");
            panic!("subcommand blew up");
        });

        assert!(result.is_err());
        assert_eq!(std::env::var(KEY).unwrap(), "before-panic");
    }
}
