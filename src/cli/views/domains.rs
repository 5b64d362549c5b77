//! Domain list columns

use serde_json::Value;

use super::format::date;
use crate::cli::render::{display_value, Column, Tone};

fn verified(v: &Value, _: &Value) -> String {
    if v.as_bool().unwrap_or(false) {
        "✓".to_string()
    } else {
        "✗".to_string()
    }
}

fn verified_tone(cell: &str) -> Tone {
    if cell == "✓" {
        Tone::Good
    } else {
        Tone::Warn
    }
}

fn name(v: &Value, _: &Value) -> String {
    display_value(v)
}

fn accent(_: &str) -> Tone {
    Tone::Accent
}

fn created(v: &Value, _: &Value) -> String {
    date(v)
}

pub const COLUMNS: [Column; 3] = [
    Column::new("name", "Domain").format(name).tone(accent),
    Column::new("verified", "Verified").format(verified).tone(verified_tone),
    Column::new("createdAt", "Created").format(created),
];
