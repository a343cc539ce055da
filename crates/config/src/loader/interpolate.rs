//! Extended `${section:key}` interpolation within the base layer.
//!
//! Responsibilities:
//! - Expand `${section:key}`, `${key}` and `$$` in every base value.
//! - Materialize inherited DEFAULT keys into each section, interpolated in that
//!   section's context.
//!
//! Does NOT handle:
//! - `{name}` DEFAULT placeholders or `{{NAME}}` runtime tokens (see substitution.rs).
//! - Override or environment values, which are never interpolated this way.
//!
//! Invariants:
//! - Referenced values are interpolated recursively, at most `MAX_INTERPOLATION_DEPTH` deep.
//! - The DEFAULT map of the returned layer is left raw.

use std::collections::BTreeMap;

use super::error::ConfigError;
use super::ini::{RawLayer, SectionMap};
use crate::constants::MAX_INTERPOLATION_DEPTH;

/// Return a layer whose sections hold every visible key with references expanded.
pub fn interpolate_layer(raw: &RawLayer) -> Result<RawLayer, ConfigError> {
    let mut sections = BTreeMap::new();

    for name in raw.section_names() {
        let items = raw.items(name).unwrap_or_default();
        let mut resolved = SectionMap::new();
        for (key, value) in &items {
            let expanded = interpolate_value(raw, name, key, value, 1)?;
            resolved.insert(key.clone(), expanded);
        }
        sections.insert(name.to_string(), resolved);
    }

    Ok(RawLayer::from_parts(raw.defaults().clone(), sections))
}

fn interpolate_value(
    raw: &RawLayer,
    section: &str,
    key: &str,
    value: &str,
    depth: usize,
) -> Result<String, ConfigError> {
    if depth > MAX_INTERPOLATION_DEPTH {
        return Err(ConfigError::InterpolationDepth {
            section: section.to_string(),
            key: key.to_string(),
        });
    }
    if !value.contains('$') {
        return Ok(value.to_string());
    }

    let syntax = |message: &str| ConfigError::InterpolationSyntax {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    };

    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
        } else if let Some(body) = after.strip_prefix('{') {
            let end = body
                .find('}')
                .ok_or_else(|| syntax("unterminated '${' reference"))?;
            let reference = &body[..end];
            if reference.matches(':').count() > 1 {
                return Err(syntax("more than one ':' in reference"));
            }
            let (ref_section, ref_key) = reference.split_once(':').unwrap_or((section, reference));

            let target =
                raw.get(ref_section, ref_key)
                    .ok_or_else(|| ConfigError::InterpolationMissing {
                        section: section.to_string(),
                        key: key.to_string(),
                        reference: reference.to_string(),
                    })?;
            out.push_str(&interpolate_value(
                raw,
                ref_section,
                ref_key,
                target,
                depth + 1,
            )?);
            rest = &body[end + 1..];
        } else {
            return Err(syntax("'$' must be followed by '$' or '{'"));
        }
    }
    out.push_str(rest);

    Ok(out)
}
