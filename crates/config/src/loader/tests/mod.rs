//! Tests for the configuration loader pipeline.
//!
//! Responsibilities:
//! - Test base-file loading, typing, and DEFAULT substitution end to end.
//! - Test override validation and precedence.
//! - Test environment variable precedence and provenance.
//! - Test the interpolation scenarios across all three substitution syntaxes.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - INI line parsing details (tested in ini.rs).
//! - Substitution engine internals (tested in substitution.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::substitution::TokenSource;

pub mod interpolation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_cfg(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Deterministic runtime token values.
pub struct FixedTokens;

impl TokenSource for FixedTokens {
    fn user(&self) -> Option<String> {
        Some("tester".to_string())
    }

    fn date(&self) -> String {
        "20240101".to_string()
    }

    fn git_branch(&self) -> Option<String> {
        Some("main".to_string())
    }

    fn cwd(&self) -> Option<String> {
        Some("/workspace".to_string())
    }
}
