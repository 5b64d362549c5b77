//! Shared cell and field formatting helpers

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

use crate::cli::render::display_value;

pub const NOT_AVAILABLE: &str = "N/A";

/// Shorten to `max` chars, marking the cut with `...`.
pub fn truncate_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{head}...")
}

/// Text of a value, or `None` when null, empty or false-y.
pub fn present(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(display_value(other)),
    }
}

/// Value at a JSON pointer (`/meta/githubCommitSha`) or `N/A`.
pub fn text_or_na(record: &Value, pointer: &str) -> String {
    text_or(record, pointer, NOT_AVAILABLE)
}

/// Value at a JSON pointer or the given fallback.
pub fn text_or(record: &Value, pointer: &str, fallback: &str) -> String {
    present(record.pointer(pointer)).unwrap_or_else(|| fallback.to_string())
}

/// First present value among several pointers.
pub fn first_present(record: &Value, pointers: &[&str]) -> Option<String> {
    pointers.iter().find_map(|p| present(record.pointer(p)))
}

/// Epoch-milliseconds timestamp as a point in time.
pub fn timestamp<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<DateTime<Tz>> {
    let millis = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        Value::String(s) => s.parse::<i64>().ok()?,
        _ => return None,
    };
    tz.timestamp_millis_opt(millis).single()
}

fn format_local(value: &Value, pattern: &str) -> String {
    timestamp(value, &Local)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Local date and time, `N/A` when missing.
pub fn date_time(value: &Value) -> String {
    format_local(value, "%Y-%m-%d %H:%M:%S")
}

/// Local date only.
pub fn date(value: &Value) -> String {
    format_local(value, "%Y-%m-%d")
}

/// Local wall-clock time only; empty when missing.
pub fn time_of_day(value: &Value) -> String {
    timestamp(value, &Local)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
