//! Table mode
//!
//! Two passes: all rows are formatted once to size the columns, then
//! formatted again while emitting. Formatters are pure, so both passes
//! see the same text.

use std::io::{self, Write};

use serde_json::Value;

use super::{clip, display_value, pad, text_width, Renderer, Tone};

/// Hard ceiling for a column's width.
pub const MAX_COLUMN_WIDTH: usize = 50;

const SEPARATOR: &str = "  ";

/// Turns a field value (and the full record) into display text.
pub type CellFormatter = fn(&Value, &Value) -> String;

/// Picks a tone from the already formatted cell text.
pub type CellTone = fn(&str) -> Tone;

/// One table column: which field, what header, how to show it.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub format: Option<CellFormatter>,
    pub tone: Option<CellTone>,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: None,
            tone: None,
        }
    }

    pub const fn format(self, format: CellFormatter) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    pub const fn tone(self, tone: CellTone) -> Self {
        Self {
            tone: Some(tone),
            ..self
        }
    }

    /// Display text for this column in `record`. Missing fields read as null.
    pub fn cell(&self, record: &Value) -> String {
        let value = record.get(self.key).unwrap_or(&Value::Null);
        match self.format {
            Some(format) => format(value, record),
            None => display_value(value),
        }
    }
}

/// Column widths: max of label and every formatted cell, capped.
pub fn column_widths(rows: &[Value], columns: &[Column]) -> Vec<usize> {
    columns
        .iter()
        .map(|col| {
            let widest_cell = rows
                .iter()
                .map(|row| text_width(&col.cell(row)))
                .max()
                .unwrap_or(0);
            text_width(col.label).max(widest_cell).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

impl Renderer {
    /// Render `rows` as an aligned table.
    ///
    /// An empty slice prints only the no-results notice.
    pub fn table<W: Write>(&self, out: &mut W, rows: &[Value], columns: &[Column]) -> io::Result<()> {
        if rows.is_empty() {
            writeln!(out, "{}", self.paint("No results found.", Tone::Warn))?;
            return Ok(());
        }

        let widths = column_widths(rows, columns);

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| pad(col.label, w))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let rule = "─".repeat(text_width(&header));
        let header_line = if self.color_enabled() {
            self.heading(&self.paint(&header, Tone::Accent))
        } else {
            header
        };
        writeln!(out, "{header_line}")?;
        writeln!(out, "{}", self.paint(&rule, Tone::Muted))?;

        for row in rows {
            let line = columns
                .iter()
                .zip(&widths)
                .map(|(col, &w)| {
                    let text = col.cell(row);
                    let padded = pad(clip(&text, w), w);
                    match col.tone {
                        Some(tone) => self.paint(&padded, tone(&text)),
                        None => padded,
                    }
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            writeln!(out, "{line}")?;
        }

        writeln!(out)?;
        writeln!(out, "{}", self.paint(&format!("{} result(s)", rows.len()), Tone::Muted))?;
        Ok(())
    }
}
