//! Centralized constants for the mlp-conf workspace.
//!
//! This module contains file names, environment variable names, and parser
//! limits shared between the library and the CLI.

// =============================================================================
// File Names
// =============================================================================

/// Default base configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "project.cfg";

/// Default override configuration file, relative to the working directory.
pub const DEFAULT_OVERRIDE_FILE: &str = "project.override.cfg";

// =============================================================================
// Sections & Keys
// =============================================================================

/// Name of the section whose keys are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Keys beginning with this marker are internal and never exposed.
pub const RESERVED_KEY_PREFIX: &str = "_";

/// Key name (compared case-insensitively) that always stays a string.
pub const DATE_KEY: &str = "date";

// =============================================================================
// Environment Variables
// =============================================================================

/// Prefix for per-key environment overrides: `MLP_<SECTION>_<KEY>`.
pub const ENV_PREFIX: &str = "MLP";

/// Primary username variable for the `{{USER}}` token.
pub const USER_ENV_VAR: &str = "USER";

/// Fallback username variable (Windows) for the `{{USER}}` token.
pub const USERNAME_ENV_VAR: &str = "USERNAME";

/// Setting this to `1` or `true` disables `.env` loading.
pub const DOTENV_DISABLED_ENV_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Interpolation
// =============================================================================

/// Maximum nesting of `${...}` references before interpolation gives up.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

/// Date format used by the `{{DATE}}` token.
pub const DATE_TOKEN_FORMAT: &str = "%Y%m%d";
