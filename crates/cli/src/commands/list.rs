//! `list` command: print every resolved parameter with its source.

use std::path::Path;

use anyhow::Result;
use mlp_config::Configuration;

use crate::formatters::{OutputFormat, ParamRow, get_formatter, output_result};

pub fn run(config: &Configuration, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let params = config.params();
    let rows: Vec<ParamRow<'_>> = params.iter().map(ParamRow::from).collect();
    let output = get_formatter(format).format_params(&rows)?;
    output_result(&output, format, output_file)
}
