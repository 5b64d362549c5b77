//! Command dispatch: maps parsed args onto endpoint builders, the executor
//! and the renderer.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::services::endpoints::{self, DeploymentFilter, EventOptions};
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{
    Cli, Commands, ConfigCommands, DeploymentCommands, DomainCommands, LogCommands,
    ProjectCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{self, Progress};
use crate::cli::render::{render_json, Column, DetailView, Renderer};
use crate::cli::views;
use crate::config::Settings;
use crate::domain::{Envelope, RequestDescriptor};
use crate::infrastructure::di::ServiceContainer;

const NOT_SET: &str = "(not set)";

/// Whether the command reads the layered settings.
///
/// `config set`, `config path` and `config clear` only touch the file layer,
/// so they keep working when the config file is unparseable.
pub fn needs_settings(cli: &Cli) -> bool {
    !matches!(
        &cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Set { .. } | ConfigCommands::Path | ConfigCommands::Clear,
        }) | Some(Commands::Completion { .. })
            | None
    )
}

/// Execute the parsed command against stdout.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let renderer = Renderer::for_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(cli, container, &renderer, &mut out)
}

/// Execute the parsed command, writing data output to `out`.
pub fn execute_command_to<W: Write>(
    cli: &Cli,
    container: &ServiceContainer,
    renderer: &Renderer,
    out: &mut W,
) -> CliResult<()> {
    let mut ctx = Context {
        container,
        renderer,
        out,
    };
    match &cli.command {
        Some(Commands::Config { command }) => ctx.config(command),
        Some(Commands::Deployments { command }) => ctx.deployments(command),
        Some(Commands::Projects { command }) => ctx.projects(command),
        Some(Commands::Domains { command }) => ctx.domains(command),
        Some(Commands::Logs { command }) => ctx.logs(command),
        // handled in main before a container exists
        Some(Commands::Completion { .. }) => Ok(()),
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

struct Context<'a, W: Write> {
    container: &'a ServiceContainer,
    renderer: &'a Renderer,
    out: &'a mut W,
}

/// How a successful payload is shown when `--json` is off.
enum View<'v> {
    Table { field: &'v str, columns: &'v [Column] },
    Detail(fn(&Value) -> DetailView),
    Events { deployment_id: &'v str },
}

impl<'a, W: Write> Context<'a, W> {
    /// Credentials must be present before any API call.
    fn require_auth(&self) -> CliResult<()> {
        if self.container.settings.is_configured() {
            Ok(())
        } else {
            Err(CliError::NotConfigured)
        }
    }

    fn team(&self, flag: &Option<String>) -> Option<String> {
        endpoints::resolve_team(flag.as_deref(), self.container.settings.team_id.as_deref())
    }

    /// Run one request and render it. JSON mode is checked first and
    /// bypasses the views entirely.
    fn run(
        &mut self,
        notice: &str,
        descriptor: RequestDescriptor,
        json: bool,
        view: View<'_>,
    ) -> CliResult<()> {
        self.require_auth()?;
        debug!("{} {}", descriptor.method(), descriptor.path());

        let payload = {
            let _progress = Progress::start(notice, !json);
            self.container
                .executor
                .execute(&descriptor)
                .map_err(ApplicationError::from)?
        };

        if json {
            render_json(&mut *self.out, &payload)?;
            return Ok(());
        }

        match view {
            View::Table { field, columns } => {
                let rows = Envelope::resolve(&payload, field);
                self.renderer.table(&mut *self.out, rows.items(), columns)?;
            }
            View::Detail(build) => {
                self.renderer.detail(&mut *self.out, &build(&payload))?;
            }
            View::Events { deployment_id } => {
                views::logs::render_events(self.renderer, &mut *self.out, deployment_id, &payload)?;
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn deployments(&mut self, command: &DeploymentCommands) -> CliResult<()> {
        match command {
            DeploymentCommands::List {
                limit,
                project,
                state,
                target,
                team,
                json,
            } => {
                let filter = DeploymentFilter {
                    limit: *limit,
                    team_id: self.team(team),
                    project_id: project.clone(),
                    state: state.map(|s| s.as_str().to_string()),
                    target: target.map(|t| t.as_str().to_string()),
                };
                self.run(
                    "Fetching deployments...",
                    endpoints::list_deployments(&filter),
                    *json,
                    View::Table {
                        field: "deployments",
                        columns: &views::deployments::COLUMNS,
                    },
                )
            }
            DeploymentCommands::Get { id, team, json } => {
                let team = self.team(team);
                self.run(
                    "Fetching deployment...",
                    endpoints::get_deployment(id, team.as_deref()),
                    *json,
                    View::Detail(views::deployments::detail),
                )
            }
        }
    }

    #[instrument(skip(self))]
    fn projects(&mut self, command: &ProjectCommands) -> CliResult<()> {
        match command {
            ProjectCommands::List {
                limit,
                search,
                team,
                json,
            } => {
                let team = self.team(team);
                self.run(
                    "Fetching projects...",
                    endpoints::list_projects(*limit, team.as_deref(), search.as_deref()),
                    *json,
                    View::Table {
                        field: "projects",
                        columns: &views::projects::COLUMNS,
                    },
                )
            }
            ProjectCommands::Get { id, team, json } => {
                let team = self.team(team);
                self.run(
                    "Fetching project...",
                    endpoints::get_project(id, team.as_deref()),
                    *json,
                    View::Detail(views::projects::detail),
                )
            }
        }
    }

    #[instrument(skip(self))]
    fn domains(&mut self, command: &DomainCommands) -> CliResult<()> {
        match command {
            DomainCommands::List { limit, team, json } => {
                let team = self.team(team);
                self.run(
                    "Fetching domains...",
                    endpoints::list_domains(*limit, team.as_deref()),
                    *json,
                    View::Table {
                        field: "domains",
                        columns: &views::domains::COLUMNS,
                    },
                )
            }
        }
    }

    #[instrument(skip(self))]
    fn logs(&mut self, command: &LogCommands) -> CliResult<()> {
        match command {
            LogCommands::Get {
                deployment_id,
                limit,
                follow,
                builds,
                team,
                json,
            } => {
                let options = EventOptions {
                    limit: *limit,
                    team_id: self.team(team),
                    follow: *follow,
                    builds: *builds,
                };
                self.run(
                    "Fetching logs...",
                    endpoints::deployment_events(deployment_id, &options),
                    *json,
                    View::Events { deployment_id },
                )
            }
        }
    }

    #[instrument(skip(self))]
    fn config(&mut self, command: &ConfigCommands) -> CliResult<()> {
        match command {
            ConfigCommands::Set {
                token,
                team,
                base_url,
            } => {
                if token.is_none() && team.is_none() && base_url.is_none() {
                    return Err(CliError::InvalidArgs(
                        "nothing to set, pass --token, --team or --base-url".to_string(),
                    ));
                }
                let path = self.config_path()?;
                let mut stored = Settings::load_file_only(&path)?;
                let mut changes = Vec::new();
                if let Some(token) = token {
                    stored.api_key = Some(token.clone());
                    changes.push("API token saved".to_string());
                }
                if let Some(team) = team {
                    stored.team_id = Some(team.clone());
                    changes.push(format!("Team ID set to: {team}"));
                }
                if let Some(url) = base_url {
                    stored.base_url = Some(url.clone());
                    changes.push(format!("Base URL set to: {url}"));
                }
                stored.save_to(&path)?;
                for change in &changes {
                    output::success(change);
                }
                debug!("config written to {}", path.display());
                Ok(())
            }
            ConfigCommands::Show => {
                let settings = &self.container.settings;
                output::header("Current Configuration:");
                output::detail(
                    "API Key",
                    &settings
                        .masked_api_key()
                        .unwrap_or_else(|| NOT_SET.to_string()),
                );
                output::detail("Team ID", settings.team_id.as_deref().unwrap_or(NOT_SET));
                output::detail("Base URL", settings.effective_base_url());
                if let Some(path) = &self.container.config_path {
                    output::detail("Config file", &path.display());
                }
                Ok(())
            }
            ConfigCommands::Path => {
                let path = self.config_path()?;
                writeln!(self.out, "{}", path.display())?;
                Ok(())
            }
            ConfigCommands::Clear => {
                let path = self.config_path()?;
                if path.exists() {
                    remove_config(&path)?;
                    output::success(&format!("Removed {}", path.display()));
                } else {
                    output::info(&format!("No config file at {}", path.display()));
                }
                Ok(())
            }
        }
    }

    fn config_path(&self) -> CliResult<PathBuf> {
        self.container.config_path.clone().ok_or_else(|| {
            ApplicationError::Config {
                message: "cannot determine config directory".to_string(),
            }
            .into()
        })
    }
}

fn remove_config(path: &Path) -> CliResult<()> {
    std::fs::remove_file(path).with_context("remove config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["vercelctl"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn given_file_only_config_commands_when_checking_then_settings_not_needed() {
        assert!(!needs_settings(&parse(&["config", "set", "--token", "t"])));
        assert!(!needs_settings(&parse(&["config", "path"])));
        assert!(!needs_settings(&parse(&["config", "clear"])));
    }

    #[test]
    fn given_api_or_show_commands_when_checking_then_settings_needed() {
        assert!(needs_settings(&parse(&["config", "show"])));
        assert!(needs_settings(&parse(&["deployments", "list"])));
        assert!(needs_settings(&parse(&["logs", "get", "dpl_1"])));
    }
}
