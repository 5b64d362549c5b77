//! Project list columns and detail layout

use serde_json::Value;

use super::format::{date, date_time, present, text_or, text_or_na, truncate_ellipsis, NOT_AVAILABLE};
use crate::cli::render::{display_value, Column, DetailView, Section, Tone};

fn short_id(v: &Value, _: &Value) -> String {
    truncate_ellipsis(&display_value(v), 20)
}

fn short_name(v: &Value, _: &Value) -> String {
    truncate_ellipsis(&display_value(v), 30)
}

fn framework(v: &Value, _: &Value) -> String {
    present(Some(v)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn updated(v: &Value, _: &Value) -> String {
    date(v)
}

pub const COLUMNS: [Column; 4] = [
    Column::new("id", "ID").format(short_id),
    Column::new("name", "Name").format(short_name),
    Column::new("framework", "Framework").format(framework),
    Column::new("updatedAt", "Updated").format(updated),
];

pub fn detail(data: &Value) -> DetailView {
    let link = data.get("link").filter(|l| l.is_object()).map(|link| {
        Section::new("Git Repository")
            .field("Type", text_or_na(link, "/type"))
            .field("Repo", text_or_na(link, "/repo"))
            .field("Production", text_or_na(link, "/productionBranch"))
    });

    DetailView::new("Project Details")
        .toned("ID", text_or_na(data, "/id"), Tone::Accent)
        .field("Name", text_or_na(data, "/name"))
        .field("Framework", text_or_na(data, "/framework"))
        .field("Build Command", text_or_na(data, "/buildCommand"))
        .field("Dev Command", text_or_na(data, "/devCommand"))
        .field("Install Command", text_or_na(data, "/installCommand"))
        .field("Output Dir", text_or_na(data, "/outputDirectory"))
        .field("Root Dir", text_or(data, "/rootDirectory", "/"))
        .field("Node Version", text_or_na(data, "/nodeVersion"))
        .field("Created", date_time(data.get("createdAt").unwrap_or(&Value::Null)))
        .field("Updated", date_time(data.get("updatedAt").unwrap_or(&Value::Null)))
        .section(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::render::Renderer;
    use serde_json::json;

    /// A top-level `Label:  ...  value` line exists.
    fn matches_label(out: &str, label: &str, value: &str) -> bool {
        out.lines().any(|line| {
            line.strip_prefix(&format!("{label}:"))
                .map(|rest| rest.starts_with("  ") && rest.trim_start() == value)
                .unwrap_or(false)
        })
    }

    fn render_detail(data: &Value) -> String {
        let mut buf = Vec::new();
        Renderer::plain().detail(&mut buf, &detail(data)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn given_missing_framework_when_rendering_detail_then_na() {
        let out = render_detail(&json!({"id": "prj_1", "name": "web"}));

        assert!(matches_label(&out, "Framework", "N/A"));
        assert!(matches_label(&out, "Root Dir", "/"));
        assert!(matches_label(&out, "Name", "web"));
        assert!(!out.contains("Git Repository"));
    }

    #[test]
    fn given_link_when_rendering_detail_then_git_section() {
        let out = render_detail(&json!({
            "id": "prj_1",
            "name": "web",
            "framework": "nextjs",
            "link": {"type": "github", "repo": "acme/web"}
        }));

        assert!(matches_label(&out, "Framework", "nextjs"));
        assert!(out.contains("Git Repository:\n"));
        assert!(out.contains("  Repo:        acme/web"));
        assert!(out.contains("  Production:  N/A"));
    }

    #[test]
    fn given_project_without_framework_when_rendering_table_then_na_cell() {
        let rows = vec![json!({"id": "prj_1", "name": "web", "updatedAt": null})];
        let mut buf = Vec::new();
        Renderer::plain().table(&mut buf, &rows, &COLUMNS).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let row = out.lines().nth(2).unwrap();
        assert_eq!(row, "prj_1  web   N/A        N/A    ");
    }
}
