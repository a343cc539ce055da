//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Parse the base and override INI files into raw layers.
//! - Expand `${section:key}` references within the base file.
//! - Merge base, override, and `MLP_*` environment layers with provenance.
//! - Provide a builder-pattern `ConfigLoader` that produces a `Configuration`.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Command-line flags (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over override values, which take
//!   precedence over base values.
//! - The override file may only touch sections and keys the base file defines.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod ini;
mod interpolate;
mod layers;
mod resolve;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{env_var, env_var_name};
pub use error::ConfigError;
pub use ini::{RawLayer, SectionMap, parse_str, read_file};
pub use interpolate::interpolate_layer;
pub use layers::{read_base, read_override, validate_override};
pub use resolve::{ResolvedValue, resolve_layers};
