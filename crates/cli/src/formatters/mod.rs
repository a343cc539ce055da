//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON and CSV renderings of a parameter listing.
//! - Write formatted output to stdout or to a file.
//!
//! Does NOT handle:
//! - Resolving the configuration (see `mlp_config`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | CSV | Headers only, no data | `section,key,value,source\n` |
//! | Table | Human message | `No parameters found.` |

use anyhow::Result;
use clap::ValueEnum;
use mlp_config::{Param, TypedValue};
use serde::Serialize;

mod common;
mod csv;
mod json;
mod table;

pub use self::common::output_result;
pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Provenance label for a value supplied on the command line.
pub const FLAG_SOURCE: &str = "flag";

/// One row of a parameter listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamRow<'a> {
    pub section: &'a str,
    pub key: &'a str,
    pub value: &'a TypedValue,
    pub source: &'static str,
}

impl<'a> From<&'a Param> for ParamRow<'a> {
    fn from(param: &'a Param) -> Self {
        Self {
            section: &param.section,
            key: &param.key,
            value: &param.value,
            source: param.source.as_str(),
        }
    }
}

/// Formatter trait for parameter listings.
pub trait Formatter {
    fn format_params(&self, rows: &[ParamRow<'_>]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
