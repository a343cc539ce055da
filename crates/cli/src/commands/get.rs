//! `get` command: print a single parameter.
//!
//! Responsibilities:
//! - Resolve a `section.key` id against the configuration.
//! - Print the bare value in table mode, or a one-row listing for JSON and CSV.

use std::path::Path;

use anyhow::{Result, anyhow};
use mlp_config::Configuration;

use crate::formatters::{OutputFormat, ParamRow, get_formatter, output_result};

pub fn run(
    config: &Configuration,
    id: &str,
    with_source: bool,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let (section, key, value) = config
        .lookup(id)
        .ok_or_else(|| anyhow!("Unknown parameter '{id}'"))?;
    let source = config
        .section(section)
        .and_then(|s| s.source(key))
        .ok_or_else(|| anyhow!("No source recorded for '{id}'"))?;

    let output = match format {
        OutputFormat::Table if with_source => format!("{value} ({source})\n"),
        OutputFormat::Table => format!("{value}\n"),
        _ => {
            let row = ParamRow {
                section,
                key,
                value,
                source: source.as_str(),
            };
            get_formatter(format).format_params(&[row])?
        }
    };

    output_result(&output, format, output_file)
}
