//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and usage errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 matches clap's own code for usage errors.

use mlp_config::ConfigError;

/// Structured exit codes for mlp-conf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable or malformed files, failed interpolation.
    GeneralError = 1,

    /// Usage error - bad arguments or a flag value of the wrong type.
    UsageError = 2,

    /// Validation error - the override file does not match the base file,
    /// or a file repeats a section or key.
    ///
    /// Scripts should fix the configuration files; retrying will not help.
    ValidationError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::UnknownOverrideSection { .. }
            | ConfigError::UnknownOverrideKey { .. }
            | ConfigError::DuplicateSection { .. }
            | ConfigError::DuplicateKey { .. } => ExitCode::ValidationError,

            ConfigError::MalformedFlagValue { .. } => ExitCode::UsageError,

            ConfigError::ConfigFileRead { .. }
            | ConfigError::MissingSectionHeader { .. }
            | ConfigError::Syntax { .. }
            | ConfigError::InterpolationMissing { .. }
            | ConfigError::InterpolationSyntax { .. }
            | ConfigError::InterpolationDepth { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }
        ExitCode::GeneralError
    }
}
