//! Base and override layer reading.
//!
//! Responsibilities:
//! - Read the base file and apply extended interpolation to it.
//! - Read the optional override file and validate it against the base layer.
//!
//! Does NOT handle:
//! - Environment variables or precedence (see resolve.rs).
//!
//! Invariants:
//! - A missing file is an empty layer, for the base and the override alike.
//!   Any other read failure is an error.
//! - Every override section must exist in the base layer, and every override key
//!   must be visible in the corresponding base section (DEFAULT inheritance included).

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::error::ConfigError;
use super::ini::{self, RawLayer};
use super::interpolate::interpolate_layer;

/// Read the base file and expand `${section:key}` references.
///
/// Returns an empty layer when there is no file at `path`.
pub fn read_base(path: &Path) -> Result<RawLayer, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No base config present");
        return Ok(RawLayer::default());
    }

    let raw = ini::read_file(path)?;
    let expanded = interpolate_layer(&raw)?;
    debug!(
        path = %path.display(),
        sections = expanded.section_names().count(),
        defaults = expanded.defaults().len(),
        "Loaded base config"
    );
    Ok(expanded)
}

/// Read the override file if it exists and validate it against `base`.
///
/// Returns `Ok(None)` when there is no file at `path`.
pub fn read_override(path: &Path, base: &RawLayer) -> Result<Option<RawLayer>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No override config present");
        return Ok(None);
    }

    let raw = ini::read_file(path)?;
    let overrides = inherit_defaults(&raw);
    validate_override(&overrides, base)?;
    debug!(
        path = %path.display(),
        sections = overrides.section_names().count(),
        "Loaded override config"
    );
    Ok(Some(overrides))
}

/// Check that the override layer only touches sections and keys the base layer defines.
pub fn validate_override(overrides: &RawLayer, base: &RawLayer) -> Result<(), ConfigError> {
    for section in overrides.section_names() {
        let Some(base_keys) = base.declared(section) else {
            return Err(ConfigError::UnknownOverrideSection {
                section: section.to_string(),
            });
        };
        let Some(keys) = overrides.declared(section) else {
            continue;
        };
        if let Some(unknown) = keys.keys().find(|key| !base_keys.contains_key(*key)) {
            return Err(ConfigError::UnknownOverrideKey {
                section: section.to_string(),
                key: unknown.clone(),
            });
        }
    }
    Ok(())
}

fn inherit_defaults(raw: &RawLayer) -> RawLayer {
    let sections: BTreeMap<_, _> = raw
        .section_names()
        .map(|name| (name.to_string(), raw.items(name).unwrap_or_default()))
        .collect();
    RawLayer::from_parts(raw.defaults().clone(), sections)
}
