//! Environment variable layer.
//!
//! Responsibilities:
//! - Derive the `MLP_<SECTION>_<KEY>` variable name for every base key.
//! - Collect the environment-derived layer for the keys the base layer defines.
//!
//! Does NOT handle:
//! - Choosing between layers (see resolve.rs).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Section and key are upper-cased but otherwise used literally (dots stay dots).
//! - A variable set to an empty string still counts as set.
//! - Variables whose value is not valid Unicode are treated as unset.
//! - Variables that match no base key are never read.

use std::collections::BTreeMap;

use tracing::debug;

use super::ini::{RawLayer, SectionMap};
use crate::constants::ENV_PREFIX;

/// Name of the environment variable that overrides `section`/`key`.
pub fn env_var_name(section: &str, key: &str) -> String {
    format!(
        "{ENV_PREFIX}_{}_{}",
        section.to_uppercase(),
        key.to_uppercase()
    )
}

/// Read an environment variable, returning None if unset or not valid Unicode.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Build the environment layer for every key of every section in `base`.
pub fn collect_env_layer(base: &RawLayer) -> RawLayer {
    let mut sections = BTreeMap::new();

    for section in base.section_names() {
        let Some(keys) = base.declared(section) else {
            continue;
        };
        let found: SectionMap = keys
            .keys()
            .filter_map(|key| {
                let name = env_var_name(section, key);
                env_var(&name).map(|value| {
                    debug!(var = %name, "Using environment override");
                    (key.clone(), value)
                })
            })
            .collect();
        if !found.is_empty() {
            sections.insert(section.to_string(), found);
        }
    }

    RawLayer::from_parts(SectionMap::new(), sections)
}
