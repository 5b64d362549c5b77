//! Rendering of API payloads: aligned tables, detail views, raw JSON
//!
//! Everything writes into an `io::Write` so output can be captured in
//! tests. Widths are measured on plain text; colour is applied last.

mod detail;
mod json;
mod table;

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

pub use detail::{DetailView, Section};
pub use json::render_json;
pub use table::{CellFormatter, CellTone, Column, MAX_COLUMN_WIDTH};

/// Semantic colour of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Identifiers, names
    Accent,
    /// URLs
    Link,
    Good,
    Warn,
    Bad,
    Muted,
}

/// Renders tables and detail views, optionally coloured.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Renderer following the terminal's colour support (NO_COLOR, CLICOLOR, tty).
    pub fn for_terminal() -> Self {
        let tty = std::io::stdout().is_terminal();
        Self::new(tty && colored::control::SHOULD_COLORIZE.should_colorize())
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub(crate) fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled: ColoredString = match tone {
            Tone::Plain => return text.to_string(),
            Tone::Accent => text.cyan(),
            Tone::Link => text.underline(),
            Tone::Good => text.green(),
            Tone::Warn => text.yellow(),
            Tone::Bad => text.red(),
            Tone::Muted => text.dimmed(),
        };
        styled.to_string()
    }

    pub(crate) fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Default display text of a JSON value: strings unquoted, null empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Terminal column width of `text`.
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `width` terminal columns, without ellipsis.
pub fn clip(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Right-pad `text` with spaces up to `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    let current = text_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    for _ in current..width {
        out.push(' ');
    }
    out
}
