//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format parameter listings as RFC 4180 compliant CSV.
//!
//! Invariants:
//! - The header row is always written, even for an empty listing.

use anyhow::{Result, anyhow};

use super::{Formatter, ParamRow};

const HEADERS: [&str; 4] = ["section", "key", "value", "source"];

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_params(&self, rows: &[ParamRow<'_>]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS)?;
        for row in rows {
            let value = row.value.to_string();
            writer.write_record([row.section, row.key, value.as_str(), row.source])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
