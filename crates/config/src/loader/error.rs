//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration loading failure.
//! - Define the flag parsing error shared with the CLI flag mirror.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, line numbers, keys).
//! - Every variant is fatal to the load that produced it; there is no partial result.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown section '{section}' in override config")]
    UnknownOverrideSection { section: String },

    #[error("Unknown key '{key}' in override config section '{section}'")]
    UnknownOverrideKey { section: String, key: String },

    #[error("invalid value '{value}' for {flag}: expected {expected}")]
    MalformedFlagValue {
        flag: String,
        value: String,
        expected: &'static str,
    },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: key/value entry before any [section] header")]
    MissingSectionHeader { path: PathBuf, line: usize },

    #[error("{path}:{line}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{path}:{line}: section '{section}' already declared")]
    DuplicateSection {
        path: PathBuf,
        line: usize,
        section: String,
    },

    #[error("{path}:{line}: key '{key}' already declared in section '{section}'")]
    DuplicateKey {
        path: PathBuf,
        line: usize,
        section: String,
        key: String,
    },

    #[error("Bad interpolation in [{section}] {key}: '{reference}' does not exist")]
    InterpolationMissing {
        section: String,
        key: String,
        reference: String,
    },

    #[error("Bad interpolation syntax in [{section}] {key}: {message}")]
    InterpolationSyntax {
        section: String,
        key: String,
        message: String,
    },

    #[error("Interpolation too deep in [{section}] {key} (possible reference cycle)")]
    InterpolationDepth { section: String, key: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns true for errors caused by an override file that does not match the base file.
    pub fn is_override_mismatch(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownOverrideSection { .. } | ConfigError::UnknownOverrideKey { .. }
        )
    }
}
