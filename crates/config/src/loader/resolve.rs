//! Per-key precedence resolution.
//!
//! Responsibilities:
//! - Pick the winning raw value for every base key: env, then override, then base.
//! - Record which layer won.
//!
//! Does NOT handle:
//! - Substitution or typing of the winning value (see builder.rs).
//!
//! Invariants:
//! - Only keys present in the base layer are resolved.
//! - Override values only apply to sections the override layer declares.
//! - Each key is resolved independently of every other key.

use tracing::trace;

use super::ini::RawLayer;
use crate::types::Source;

/// The winning raw value for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub section: String,
    pub key: String,
    pub raw: String,
    pub source: Source,
}

/// Resolve every base key against the override and environment layers.
///
/// Results are ordered by section, then key.
pub fn resolve_layers(
    base: &RawLayer,
    overrides: Option<&RawLayer>,
    env: &RawLayer,
) -> Vec<ResolvedValue> {
    let mut resolved = Vec::new();

    for section in base.section_names() {
        let Some(keys) = base.declared(section) else {
            continue;
        };
        for (key, base_value) in keys {
            let (raw, source) = if let Some(value) = env.get(section, key) {
                (value, Source::Env)
            } else if let Some(value) = overrides
                .and_then(|layer| layer.declared(section))
                .and_then(|keys| keys.get(key))
                .map(String::as_str)
            {
                (value, Source::Override)
            } else {
                (base_value.as_str(), Source::Default)
            };
            trace!(section, key = %key, source = %source, "Resolved key");
            resolved.push(ResolvedValue {
                section: section.to_string(),
                key: key.clone(),
                raw: raw.to_string(),
                source,
            });
        }
    }

    resolved
}
