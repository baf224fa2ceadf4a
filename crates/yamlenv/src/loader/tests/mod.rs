//! Tests for the configuration loading pipeline.
//!
//! Responsibilities:
//! - Test placeholder expansion semantics (env_tests).
//! - Test the search-path policy (path_tests).
//! - Test end-to-end loading and error reporting (load_tests).
//! - Test `.env` handling and the DOTENV_DISABLED gate (dotenv_tests).
//!
//! Invariants:
//! - Tests that touch process-global state (env vars, cwd) serialize through
//!   `env_lock()` and restore state via `temp_env` or RAII guards.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for environment variable and cwd isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
