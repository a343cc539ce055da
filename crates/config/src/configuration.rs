//! The resolved, queryable configuration.
//!
//! Responsibilities:
//! - Hold every resolved section with its typed values and provenance.
//! - Answer per-section lookups, `section.key` provenance queries, and the
//!   flattened parameter listing.
//!
//! Does NOT handle:
//! - Reading files or the environment (see `loader` module).
//! - Formatting the listing for display (see the CLI crate).
//!
//! Invariants:
//! - Immutable after construction; a new load produces a new `Configuration`.
//! - The DEFAULT section is never exposed as a section of its own.
//! - Reserved keys (prefixed with `_`) are never stored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::RESERVED_KEY_PREFIX;
use crate::loader::{ConfigError, ConfigLoader};
use crate::types::{Param, Source, TypedValue};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: TypedValue,
    source: Source,
}

/// One named section of resolved values.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: BTreeMap<String, Entry>,
}

impl Section {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The typed value of `key`, if the section has it.
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// The layer that supplied `key`.
    pub fn source(&self, key: &str) -> Option<Source> {
        self.entries.get(key).map(|entry| entry.source)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), &entry.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration resolved from the base file, override file, and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    sections: BTreeMap<String, Section>,
    base_path: PathBuf,
    override_path: Option<PathBuf>,
}

impl Configuration {
    /// Load from `base_path`, applying `override_path` if that file exists.
    ///
    /// Shorthand for `ConfigLoader` with both paths set and system runtime tokens.
    pub fn load(
        base_path: impl Into<PathBuf>,
        override_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        ConfigLoader::new()
            .with_config_path(base_path.into())
            .with_override_path(override_path.into())
            .build()
    }

    /// Assemble a configuration from resolved parameters.
    ///
    /// `section_names` lists every base section so that sections without public
    /// keys are still present.
    pub(crate) fn from_params<'a>(
        section_names: impl IntoIterator<Item = &'a str>,
        params: Vec<Param>,
        base_path: PathBuf,
        override_path: Option<PathBuf>,
    ) -> Self {
        let mut sections: BTreeMap<String, Section> = section_names
            .into_iter()
            .map(|name| (name.to_string(), Section::new(name.to_string())))
            .collect();

        for param in params {
            if param.key.starts_with(RESERVED_KEY_PREFIX) {
                continue;
            }
            sections
                .entry(param.section.clone())
                .or_insert_with(|| Section::new(param.section.clone()))
                .entries
                .insert(
                    param.key,
                    Entry {
                        value: param.value,
                        source: param.source,
                    },
                );
        }

        Self {
            sections,
            base_path,
            override_path,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Sections in name order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&TypedValue> {
        self.sections.get(section)?.get(key)
    }

    /// Provenance of `id`, written as `section.key`.
    ///
    /// Both section names and keys may contain dots, so every split point is tried
    /// from left to right.
    pub fn source(&self, id: &str) -> Option<Source> {
        id.match_indices('.').find_map(|(pos, _)| {
            self.sections
                .get(&id[..pos])
                .and_then(|section| section.source(&id[pos + 1..]))
        })
    }

    /// Look up `section.key` and return the section name, key, and value.
    pub fn lookup(&self, id: &str) -> Option<(&str, &str, &TypedValue)> {
        id.match_indices('.').find_map(|(pos, _)| {
            let section = self.sections.get(&id[..pos])?;
            let (key, entry) = section.entries.get_key_value(&id[pos + 1..])?;
            Some((section.name(), key.as_str(), &entry.value))
        })
    }

    /// Every resolved key as `(section, key, value, source)`, sorted by section then key.
    pub fn params(&self) -> Vec<Param> {
        self.sections
            .values()
            .flat_map(|section| {
                section.entries.iter().map(move |(key, entry)| Param {
                    section: section.name.clone(),
                    key: key.clone(),
                    value: entry.value.clone(),
                    source: entry.source,
                })
            })
            .collect()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The override file that was applied, if one existed.
    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Section::is_empty)
    }
}
