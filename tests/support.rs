use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

use hugegraph_prompt::LANGUAGE_ENV;

/// Serializes tests that touch the process environment.
pub fn lock_test_mutex() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct LanguageEnvGuard {
    old: Option<OsString>,
}

impl LanguageEnvGuard {
    pub fn set(value: Option<&str>) -> Self {
        let old = std::env::var_os(LANGUAGE_ENV);
        match value {
            Some(value) => std::env::set_var(LANGUAGE_ENV, value),
            None => std::env::remove_var(LANGUAGE_ENV),
        }
        Self { old }
    }
}

impl Drop for LanguageEnvGuard {
    fn drop(&mut self) {
        match &self.old {
            Some(value) => std::env::set_var(LANGUAGE_ENV, value),
            None => std::env::remove_var(LANGUAGE_ENV),
        }
    }
}
