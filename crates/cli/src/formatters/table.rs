//! Table formatter implementation.
//!
//! Responsibilities:
//! - Render a parameter listing as a GitHub-flavoured Markdown table.
//!
//! Invariants:
//! - Columns are padded to the widest cell, measured in characters.
//! - `|` inside a cell is escaped so the table stays well formed.

use anyhow::Result;

use super::{Formatter, ParamRow};

const HEADERS: [&str; 4] = ["Namespace", "Key", "Value", "Source"];

/// Table formatter.
pub struct TableFormatter;

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize]) {
    output.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        output.push(' ');
        output.push_str(cell);
        output.extend(std::iter::repeat_n(' ', pad));
        output.push_str(" |");
    }
    output.push('\n');
}

impl Formatter for TableFormatter {
    fn format_params(&self, rows: &[ParamRow<'_>]) -> Result<String> {
        if rows.is_empty() {
            return Ok("No parameters found.\n".to_string());
        }

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    escape_markdown(row.section),
                    escape_markdown(row.key),
                    escape_markdown(&row.value.to_string()),
                    row.source.to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        push_row(&mut output, &headers, &widths);

        output.push('|');
        for width in &widths {
            output.push_str(&"-".repeat(width + 2));
            output.push('|');
        }
        output.push('\n');

        for row in &cells {
            push_row(&mut output, row, &widths);
        }

        Ok(output)
    }
}
