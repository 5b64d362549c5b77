//! Endpoint catalog
//!
//! Pure builders for every API call the CLI makes. Identifiers are
//! interpolated into the path here; the executor never templates.

use crate::domain::RequestDescriptor;

/// Default page size for list endpoints.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Default number of events for the logs endpoint.
pub const DEFAULT_EVENT_LIMIT: u32 = 100;

/// Filters for `GET /v6/deployments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentFilter {
    pub limit: u32,
    pub team_id: Option<String>,
    pub project_id: Option<String>,
    pub state: Option<String>,
    pub target: Option<String>,
}

/// Options for `GET /v2/deployments/<id>/events`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOptions {
    pub limit: u32,
    pub team_id: Option<String>,
    /// Forwarded as `follow=1`; the call itself never streams.
    pub follow: bool,
    pub builds: bool,
}

/// Explicit flag beats configured default.
pub fn resolve_team(flag: Option<&str>, configured: Option<&str>) -> Option<String> {
    flag.or(configured)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

pub fn list_deployments(filter: &DeploymentFilter) -> RequestDescriptor {
    RequestDescriptor::get("/v6/deployments")
        .query("limit", filter.limit)
        .query_opt("teamId", filter.team_id.as_ref())
        .query_opt("projectId", filter.project_id.as_ref())
        .query_opt("state", filter.state.as_ref())
        .query_opt("target", filter.target.as_ref())
}

pub fn get_deployment(id: &str, team_id: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get(format!("/v13/deployments/{id}")).query_opt("teamId", team_id)
}

pub fn list_projects(limit: u32, team_id: Option<&str>, search: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get("/v9/projects")
        .query("limit", limit)
        .query_opt("teamId", team_id)
        .query_opt("search", search)
}

pub fn get_project(id: &str, team_id: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get(format!("/v9/projects/{id}")).query_opt("teamId", team_id)
}

pub fn list_domains(limit: u32, team_id: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get("/v5/domains")
        .query("limit", limit)
        .query_opt("teamId", team_id)
}

pub fn deployment_events(deployment_id: &str, options: &EventOptions) -> RequestDescriptor {
    RequestDescriptor::get(format!("/v2/deployments/{deployment_id}/events"))
        .query("limit", options.limit)
        .query_opt("teamId", options.team_id.as_ref())
        .query_opt("follow", options.follow.then_some("1"))
        .query_opt("builds", options.builds.then_some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Method, QueryValue};

    #[test]
    fn given_flag_and_config_when_resolving_team_then_flag_wins() {
        assert_eq!(resolve_team(Some("flag"), Some("cfg")).as_deref(), Some("flag"));
        assert_eq!(resolve_team(None, Some("cfg")).as_deref(), Some("cfg"));
        assert_eq!(resolve_team(None, None), None);
        assert_eq!(resolve_team(Some(""), None), None);
    }

    #[test]
    fn given_full_filter_when_listing_deployments_then_all_params_present() {
        let filter = DeploymentFilter {
            limit: 5,
            team_id: Some("team_1".into()),
            project_id: Some("prj_1".into()),
            state: Some("READY".into()),
            target: Some("production".into()),
        };

        let req = list_deployments(&filter);

        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.path(), "/v6/deployments");
        assert_eq!(req.query_value("limit"), Some(&QueryValue::Int(5)));
        assert_eq!(req.query_value("projectId"), Some(&QueryValue::Str("prj_1".into())));
        assert_eq!(req.query_value("target"), Some(&QueryValue::Str("production".into())));
    }

    #[test]
    fn given_minimal_filter_when_listing_deployments_then_only_limit() {
        let filter = DeploymentFilter {
            limit: DEFAULT_LIST_LIMIT,
            ..Default::default()
        };
        let req = list_deployments(&filter);
        assert_eq!(req.query_params().len(), 1);
    }

    #[test]
    fn given_id_when_getting_deployment_then_id_in_path() {
        let req = get_deployment("dpl_abc", Some("team_1"));
        assert_eq!(req.path(), "/v13/deployments/dpl_abc");
        assert_eq!(req.query_value("teamId"), Some(&QueryValue::Str("team_1".into())));
    }

    #[test]
    fn given_follow_unset_when_building_events_then_no_follow_param() {
        let req = deployment_events(
            "dpl_1",
            &EventOptions {
                limit: DEFAULT_EVENT_LIMIT,
                builds: true,
                ..Default::default()
            },
        );
        assert_eq!(req.path(), "/v2/deployments/dpl_1/events");
        assert_eq!(req.query_value("follow"), None);
        assert_eq!(req.query_value("builds"), Some(&QueryValue::Str("1".into())));
    }

    #[test]
    fn given_follow_set_when_building_events_then_single_request_with_flag() {
        let req = deployment_events(
            "dpl_1",
            &EventOptions {
                limit: 10,
                follow: true,
                ..Default::default()
            },
        );
        assert_eq!(req.query_value("follow"), Some(&QueryValue::Str("1".into())));
    }

    #[test]
    fn test_projects_and_domains_paths() {
        assert_eq!(list_projects(20, None, Some("web")).query_value("search"), Some(&QueryValue::Str("web".into())));
        assert_eq!(get_project("prj_1", None).path(), "/v9/projects/prj_1");
        assert_eq!(list_domains(20, None).path(), "/v5/domains");
    }
}
