//! INI-style layer parsing.
//!
//! Responsibilities:
//! - Parse `[section]` headers and `key = value` / `key: value` entries into a `RawLayer`.
//! - Keep the `[DEFAULT]` section apart so it can be inherited by every other section.
//! - Reject malformed lines, entries outside a section, and duplicate sections or keys.
//!
//! Does NOT handle:
//! - `${section:key}` interpolation (see interpolate.rs).
//! - Override validation or precedence (see layers.rs and resolve.rs).
//!
//! Invariants:
//! - Section names and keys are case-sensitive and stored as written (trimmed).
//! - Values are trimmed; inline comments are not recognized.
//! - Every error carries the file path and the 1-based line number.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::error::ConfigError;
use crate::constants::DEFAULT_SECTION;

/// Keys of one section mapped to their raw string values.
pub type SectionMap = BTreeMap<String, String>;

/// Raw string values of one configuration source, before typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLayer {
    defaults: SectionMap,
    sections: BTreeMap<String, SectionMap>,
}

impl RawLayer {
    /// Keys declared in the `[DEFAULT]` section.
    pub fn defaults(&self) -> &SectionMap {
        &self.defaults
    }

    /// Names of all non-DEFAULT sections, sorted.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Keys written in `section` itself, without DEFAULT inheritance.
    pub fn declared(&self, section: &str) -> Option<&SectionMap> {
        self.sections.get(section)
    }

    /// Look up a value, falling back to DEFAULT when the section does not declare it.
    ///
    /// `section` may be `DEFAULT` itself.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        if section == DEFAULT_SECTION {
            return self.defaults.get(key).map(String::as_str);
        }
        let declared = self.sections.get(section)?;
        declared
            .get(key)
            .or_else(|| self.defaults.get(key))
            .map(String::as_str)
    }

    /// All keys visible in `section`: its own entries plus inherited DEFAULT entries.
    pub fn items(&self, section: &str) -> Option<SectionMap> {
        let declared = self.sections.get(section)?;
        let mut merged = self.defaults.clone();
        merged.extend(declared.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.sections.is_empty()
    }

    pub(crate) fn from_parts(defaults: SectionMap, sections: BTreeMap<String, SectionMap>) -> Self {
        Self { defaults, sections }
    }
}

/// Read and parse an INI file.
pub fn read_file(path: &Path) -> Result<RawLayer, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&contents, path)
}

/// Parse INI text. `path` is only used for error messages.
pub fn parse_str(contents: &str, path: &Path) -> Result<RawLayer, ConfigError> {
    let mut layer = RawLayer::default();
    let mut seen_sections: HashSet<String> = HashSet::new();
    let mut current: Option<String> = None;

    let syntax = |line: usize, message: &str| ConfigError::Syntax {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    };

    for (idx, raw_line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = if idx == 0 {
            raw_line.trim_start_matches('\u{feff}')
        } else {
            raw_line
        };
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| syntax(line_no, "unterminated section header"))?
                .trim();
            if name.is_empty() {
                return Err(syntax(line_no, "empty section name"));
            }
            if !seen_sections.insert(name.to_string()) {
                return Err(ConfigError::DuplicateSection {
                    path: path.to_path_buf(),
                    line: line_no,
                    section: name.to_string(),
                });
            }
            if name != DEFAULT_SECTION {
                layer.sections.insert(name.to_string(), SectionMap::new());
            }
            current = Some(name.to_string());
            continue;
        }

        let pos = trimmed
            .find(['=', ':'])
            .ok_or_else(|| syntax(line_no, "expected 'key = value' or a [section] header"))?;
        let key = trimmed[..pos].trim();
        let value = trimmed[pos + 1..].trim();
        if key.is_empty() {
            return Err(syntax(line_no, "empty key"));
        }

        let Some(section) = current.as_deref() else {
            return Err(ConfigError::MissingSectionHeader {
                path: path.to_path_buf(),
                line: line_no,
            });
        };

        let target = if section == DEFAULT_SECTION {
            &mut layer.defaults
        } else {
            layer.sections.entry(section.to_string()).or_default()
        };
        if target.contains_key(key) {
            return Err(ConfigError::DuplicateKey {
                path: path.to_path_buf(),
                line: line_no,
                section: section.to_string(),
                key: key.to_string(),
            });
        }
        target.insert(key.to_string(), value.to_string());
    }

    Ok(layer)
}
