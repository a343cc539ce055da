//! JSON formatter implementation.
//!
//! Values keep their native JSON types (numbers, booleans, strings).

use anyhow::Result;

use super::{Formatter, ParamRow};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_params(&self, rows: &[ParamRow<'_>]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(rows)?;
        output.push('\n');
        Ok(output)
    }
}
