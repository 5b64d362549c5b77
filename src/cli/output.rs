//! Terminal status output with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Data (tables, details, JSON) goes through `cli::render`; this module only
//! prints status lines.

use std::io::{IsTerminal, Write};

use colored::Colorize;

/// Print error (red cross) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} {}", "✗".red(), msg.to_string().red());
}

/// Print hint (dimmed) to stderr
pub fn hint(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg.to_string().dimmed());
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented label/value pair
pub fn detail(label: &str, value: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", format!("{label}:").dimmed(), value);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Transient "working" notice on stderr.
///
/// Only shown when stderr is a terminal and not suppressed (JSON mode);
/// the line is erased again when the guard is dropped.
pub struct Progress {
    active: bool,
}

impl Progress {
    pub fn start(msg: &str, enabled: bool) -> Self {
        let active = enabled && std::io::stderr().is_terminal();
        if active {
            let mut err = std::io::stderr();
            let _ = write!(err, "{} {}", "…".cyan(), msg);
            let _ = err.flush();
        }
        Self { active }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if self.active {
            let mut err = std::io::stderr();
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        }
    }
}
