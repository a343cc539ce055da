//! Layered configuration resolution for mlp-conf.
//!
//! This crate resolves a base INI file, an optional override file, and
//! `MLP_<SECTION>_<KEY>` environment variables into a typed `Configuration`
//! that records which layer supplied every value.

pub mod configuration;
pub mod constants;
mod loader;
pub mod substitution;
pub mod types;

pub use configuration::{Configuration, Section};
pub use loader::{
    ConfigError, ConfigLoader, RawLayer, ResolvedValue, SectionMap, env_var, env_var_name,
    interpolate_layer, parse_str, read_base, read_file, read_override, resolve_layers,
    validate_override,
};
pub use substitution::{SystemTokens, Token, TokenCache, TokenSource};
pub use types::{Param, Source, TypedValue, ValueKind, parse_bool};
