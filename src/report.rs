//! Plain-text and JSON output for the command line

use anyhow::{Context, Result};

use crate::parser::ParsedRecord;
use crate::reference::{Category, ReferenceData, ReferenceTable};

const HEADERS: [&str; 3] = ["Parameter", "Code", "Description"];

/// Render a record as an aligned three-column table
pub fn render_table(record: &ParsedRecord) -> String {
    let rows: Vec<[&str; 3]> = record
        .rows()
        .into_iter()
        .map(|row| [row.field.label(), row.code, row.description])
        .collect();
    format_columns(&rows)
}

/// Render a record as pretty-printed JSON
pub fn render_json(record: &ParsedRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Failed to serialize parsed record")
}

/// Render one reference table as code / description lines
pub fn render_reference_table(table: &ReferenceTable) -> String {
    let width = table
        .entries()
        .iter()
        .map(|e| e.code.chars().count())
        .max()
        .unwrap_or(0);

    table
        .entries()
        .iter()
        .map(|entry| format!("  {:<width$}  {}\n", entry.code, entry.description))
        .collect()
}

/// Render the category names with their table sizes
pub fn render_categories(reference: &ReferenceData) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            format!(
                "  {:<14} {} codes\n",
                category.key(),
                reference.table(*category).len()
            )
        })
        .collect()
}

fn format_columns(rows: &[[&str; 3]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Last column is not padded
    let format_row = |cells: &[&str; 3]| {
        format!(
            "{:<w0$}  {:<w1$}  {}\n",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1]
        )
    };

    let rule = widths.map(|w| "-".repeat(w));
    let mut out = format_row(&HEADERS);
    out.push_str(&format_row(&[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()]));
    for row in rows {
        out.push_str(&format_row(row));
    }
    out
}
