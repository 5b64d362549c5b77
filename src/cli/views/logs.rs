//! Deployment event log view

use std::io::{self, Write};

use serde_json::Value;

use super::format::{present, time_of_day};
use crate::cli::render::{pad, Renderer, Tone};
use crate::domain::Envelope;

const TYPE_WIDTH: usize = 20;

/// Event kind: `type`, then `name`, else `unknown`.
pub fn event_type(event: &Value) -> String {
    present(event.get("type"))
        .or_else(|| present(event.get("name")))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Event text: string payload, `payload.text`, `text`, else compact JSON of the payload.
pub fn event_text(event: &Value) -> String {
    match event.get("payload") {
        Some(Value::String(s)) => s.clone(),
        Some(payload @ Value::Object(map)) => match map.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => payload.to_string(),
        },
        Some(Value::Null) | None => present(event.get("text")).unwrap_or_default(),
        Some(other) => other.to_string(),
    }
}

pub fn type_tone(kind: &str) -> Tone {
    if kind.contains("error") || kind.contains("failed") {
        Tone::Bad
    } else if kind.contains("success") || kind.contains("ready") {
        Tone::Good
    } else if kind.contains("building") || kind.contains("deploying") {
        Tone::Warn
    } else {
        Tone::Plain
    }
}

pub fn render_events<W: Write>(
    r: &Renderer,
    out: &mut W,
    deployment_id: &str,
    payload: &Value,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", r.heading(&format!("Deployment Logs: {deployment_id}")))?;
    writeln!(out)?;

    let events = Envelope::resolve(payload, "events");
    if events.is_empty() {
        writeln!(out, "{}", r.paint("No events found.", Tone::Warn))?;
        return Ok(());
    }

    for event in events.items() {
        let kind = event_type(event);
        let stamp = time_of_day(event.get("created").unwrap_or(&Value::Null));
        writeln!(
            out,
            "{} {} {}",
            r.paint(&stamp, Tone::Muted),
            r.paint(&pad(&kind, TYPE_WIDTH), type_tone(&kind)),
            event_text(event)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", r.paint(&format!("{} event(s)", events.len()), Tone::Muted))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(payload: &Value) -> String {
        let mut buf = Vec::new();
        render_events(&Renderer::plain(), &mut buf, "dpl_1", payload).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn given_empty_array_when_rendering_then_no_events_notice() {
        let out = render(&json!([]));
        assert!(out.contains("Deployment Logs: dpl_1"));
        assert!(out.contains("No events found."));
        assert!(!out.contains("event(s)"));
    }

    #[test]
    fn given_null_payload_when_rendering_then_no_events_notice() {
        assert!(render(&Value::Null).contains("No events found."));
    }

    #[test]
    fn given_bare_array_when_rendering_then_one_line_per_event() {
        let out = render(&json!([
            {"type": "stdout", "payload": {"text": "Installing deps"}},
            {"name": "build-failed", "text": "exit 1"}
        ]));

        assert!(out.contains(&format!(" {} Installing deps\n", pad("stdout", 20))));
        assert!(out.contains(&format!(" {} exit 1\n", pad("build-failed", 20))));
        assert!(out.contains("2 event(s)"));
    }

    #[test]
    fn given_wrapped_events_when_rendering_then_envelope_resolved() {
        let out = render(&json!({"events": [{"type": "ready"}]}));
        assert!(out.contains("ready"));
        assert!(out.contains("1 event(s)"));
    }

    #[test]
    fn test_event_text_fallbacks() {
        assert_eq!(event_text(&json!({"payload": "plain"})), "plain");
        assert_eq!(event_text(&json!({"payload": {"code": 1}})), r#"{"code":1}"#);
        assert_eq!(event_text(&json!({})), "");
        assert_eq!(event_type(&json!({})), "unknown");
    }

    #[test]
    fn test_type_tone() {
        assert_eq!(type_tone("build-error"), Tone::Bad);
        assert_eq!(type_tone("deployment-ready"), Tone::Good);
        assert_eq!(type_tone("building"), Tone::Warn);
        assert_eq!(type_tone("stdout"), Tone::Plain);
    }
}
