//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration resolution.
//! - Run the pipeline: base file → override file → environment → substitution → typing.
//! - Optionally load a `.env` file so it can supply `MLP_*` overrides.
//!
//! Does NOT handle:
//! - INI parsing or override validation (delegated to ini.rs and layers.rs).
//! - Environment variable naming (delegated to env.rs).
//! - Command-line flags (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over override values, which take
//!   precedence over base values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Any error aborts the whole load; no partial `Configuration` is returned.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::collect_env_layer;
use super::error::ConfigError;
use super::layers::{read_base, read_override};
use super::resolve::resolve_layers;
use crate::configuration::Configuration;
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OVERRIDE_FILE, DOTENV_DISABLED_ENV_VAR, RESERVED_KEY_PREFIX,
};
use crate::substitution::{
    SystemTokens, TokenCache, TokenSource, substitute_defaults, substitute_tokens,
};
use crate::types::{Param, TypedValue};

/// Configuration loader that resolves a `Configuration` from files and the environment.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    override_path: Option<PathBuf>,
    token_source: Option<Box<dyn TokenSource>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader using the default file names.
    pub fn new() -> Self {
        Self {
            config_path: None,
            override_path: None,
            token_source: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the base config file path (default `project.cfg`).
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the override config file path (default `project.override.cfg`).
    pub fn with_override_path(mut self, path: PathBuf) -> Self {
        self.override_path = Some(path);
        self
    }

    /// Replace the source of `{{USER}}`, `{{DATE}}`, `{{GIT_BRANCH}}` and `{{CWD}}`
    /// (primarily for testing).
    pub fn with_token_source(mut self, source: impl TokenSource + 'static) -> Self {
        self.token_source = Some(Box::new(source));
        self
    }

    /// The base config file that `build()` will read.
    pub fn config_path(&self) -> &Path {
        self.config_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// The override config file that `build()` will read if it exists.
    pub fn override_path(&self) -> &Path {
        self.override_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_OVERRIDE_FILE))
    }

    /// Resolve the configuration.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let base_path = self.config_path().to_path_buf();
        let override_path = self.override_path().to_path_buf();

        let base = read_base(&base_path)?;
        let overrides = read_override(&override_path, &base)?;
        let env = collect_env_layer(&base);
        let resolved = resolve_layers(&base, overrides.as_ref(), &env);

        let system = SystemTokens;
        let source: &dyn TokenSource = match self.token_source.as_deref() {
            Some(source) => source,
            None => &system,
        };
        let tokens = TokenCache::new(source);

        let params: Vec<Param> = resolved
            .into_iter()
            .filter(|entry| !entry.key.starts_with(RESERVED_KEY_PREFIX))
            .map(|entry| {
                let with_defaults = substitute_defaults(&entry.raw, base.defaults());
                let substituted = substitute_tokens(&with_defaults, &tokens);
                let value = TypedValue::infer(&entry.key, &substituted);
                Param {
                    section: entry.section,
                    key: entry.key,
                    value,
                    source: entry.source,
                }
            })
            .collect();

        debug!(
            base = %base_path.display(),
            override_applied = overrides.is_some(),
            params = params.len(),
            "Resolved configuration"
        );

        Ok(Configuration::from_params(
            base.section_names(),
            params,
            base_path,
            overrides.map(|_| override_path),
        ))
    }
}
