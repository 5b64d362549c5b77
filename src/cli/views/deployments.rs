//! Deployment list columns and detail layout

use serde_json::Value;

use super::format::{date_time, first_present, present, text_or_na, truncate_ellipsis, NOT_AVAILABLE};
use crate::cli::render::{display_value, Column, DetailView, Section, Tone};

fn short_id(v: &Value, _: &Value) -> String {
    truncate_ellipsis(&display_value(v), 12)
}

fn short_name(v: &Value, _: &Value) -> String {
    truncate_ellipsis(&display_value(v), 25)
}

fn created(v: &Value, _: &Value) -> String {
    date_time(v)
}

/// READY is good, ERROR/CANCELED bad, anything in flight a warning.
pub fn state_tone(state: &str) -> Tone {
    match state {
        "READY" => Tone::Good,
        "ERROR" | "CANCELED" => Tone::Bad,
        _ => Tone::Warn,
    }
}

fn target_tone(target: &str) -> Tone {
    if target == "production" {
        Tone::Accent
    } else {
        Tone::Plain
    }
}

pub const COLUMNS: [Column; 5] = [
    Column::new("uid", "ID").format(short_id),
    Column::new("name", "Name").format(short_name),
    Column::new("state", "State").tone(state_tone),
    Column::new("target", "Target").tone(target_tone),
    Column::new("created", "Created").format(created),
];

pub fn detail(data: &Value) -> DetailView {
    let state = present(data.get("state"));
    let tone = state.as_deref().map(state_tone).unwrap_or(Tone::Warn);
    let created = data
        .get("created")
        .filter(|v| !v.is_null())
        .or_else(|| data.get("createdAt"))
        .unwrap_or(&Value::Null);

    let view = DetailView::new("Deployment Details")
        .toned(
            "ID",
            first_present(data, &["/uid", "/id"]).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            Tone::Accent,
        )
        .field("Name", text_or_na(data, "/name"));

    let view = match present(data.get("url")) {
        Some(url) => view.toned("URL", format!("https://{url}"), Tone::Link),
        None => view.field("URL", NOT_AVAILABLE),
    };

    let meta = data.get("meta").filter(|m| m.is_object()).map(|meta| {
        Section::new("Meta")
            .field("Git Commit", text_or_na(meta, "/githubCommitSha"))
            .field("Git Branch", text_or_na(meta, "/githubCommitRef"))
            .field("Git Repo", text_or_na(meta, "/githubCommitRepo"))
    });

    let aliases: Vec<String> = data
        .get("alias")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|a| present(Some(a)))
                .map(|a| format!("https://{a}"))
                .collect()
        })
        .unwrap_or_default();

    view.toned("State", state.unwrap_or_else(|| NOT_AVAILABLE.to_string()), tone)
        .field("Target", text_or_na(data, "/target"))
        .field("Project", text_or_na(data, "/projectId"))
        .field("Created", date_time(created))
        .field("Created By", text_or_na(data, "/creator/username"))
        .section(meta)
        .section(Some(Section::bullets("Aliases", aliases, Tone::Link)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::render::Renderer;
    use serde_json::json;

    fn render_detail(data: &Value) -> String {
        let mut buf = Vec::new();
        Renderer::plain().detail(&mut buf, &detail(data)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn given_deployments_when_rendering_table_then_ids_shortened() {
        let rows = vec![json!({
            "uid": "dpl_8jKjd7sKxLm2QpRz",
            "name": "web",
            "state": "READY",
            "target": "production",
            "created": 1_700_000_000_000i64
        })];
        let mut buf = Vec::new();
        Renderer::plain().table(&mut buf, &rows, &COLUMNS).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("ID            Name  State  Target      Created"));
        assert!(out.contains("dpl_8jKjd..."));
        assert!(out.contains("READY"));
        assert!(out.contains("1 result(s)"));
    }

    #[test]
    fn test_state_tone() {
        assert_eq!(state_tone("READY"), Tone::Good);
        assert_eq!(state_tone("CANCELED"), Tone::Bad);
        assert_eq!(state_tone("BUILDING"), Tone::Warn);
    }

    #[test]
    fn given_full_payload_when_rendering_detail_then_git_meta_and_aliases_shown() {
        let data = json!({
            "id": "dpl_1",
            "name": "web",
            "url": "web-abc.vercel.app",
            "state": "READY",
            "createdAt": 1_700_000_000_000i64,
            "creator": {"username": "ada"},
            "meta": {"githubCommitSha": "abc123", "githubCommitRef": "main"},
            "alias": ["web.example.com"]
        });

        let out = render_detail(&data);

        assert!(out.contains("dpl_1"));
        assert!(out.contains("https://web-abc.vercel.app"));
        assert!(out.contains("ada"));
        assert!(out.contains("Git Commit:  abc123"));
        assert!(out.contains("Git Repo:    N/A"));
        assert!(out.contains("  • https://web.example.com"));
        assert!(!out.contains("Created:     N/A"));
    }

    #[test]
    fn given_sparse_payload_when_rendering_detail_then_na_and_no_sections() {
        let out = render_detail(&json!({"uid": "dpl_2"}));

        assert!(out.contains("Target:"));
        assert!(out.contains("Created By:  N/A"));
        assert!(!out.contains("Meta:"));
        assert!(!out.contains("Aliases:"));
    }
}
