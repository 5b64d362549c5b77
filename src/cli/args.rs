//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::application::services::endpoints::{DEFAULT_EVENT_LIMIT, DEFAULT_LIST_LIMIT};

/// Manage Vercel deployments, projects, domains and logs from the terminal
#[derive(Parser, Debug)]
#[command(name = "vercelctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output (NO_COLOR is honoured as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage deployments
    Deployments {
        #[command(subcommand)]
        command: DeploymentCommands,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage domains
    Domains {
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Get deployment logs
    Logs {
        #[command(subcommand)]
        command: LogCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set configuration values
    Set {
        /// Vercel API token
        #[arg(long)]
        token: Option<String>,
        /// Default team ID
        #[arg(long)]
        team: Option<String>,
        /// API base URL override
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Remove the config file
    Clear,
}

/// Deployment state filter.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "UPPERCASE")]
pub enum DeploymentState {
    Building,
    Error,
    Initializing,
    Queued,
    Ready,
    Canceled,
}

impl DeploymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::Building => "BUILDING",
            DeploymentState::Error => "ERROR",
            DeploymentState::Initializing => "INITIALIZING",
            DeploymentState::Queued => "QUEUED",
            DeploymentState::Ready => "READY",
            DeploymentState::Canceled => "CANCELED",
        }
    }
}

/// Deployment target environment filter.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentTarget {
    Production,
    Staging,
    Preview,
}

impl DeploymentTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Production => "production",
            DeploymentTarget::Staging => "staging",
            DeploymentTarget::Preview => "preview",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DeploymentCommands {
    /// List deployments
    List {
        /// Number of results to return
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        /// Filter by project ID
        #[arg(long)]
        project: Option<String>,
        /// Filter by state
        #[arg(long, value_enum, ignore_case = true)]
        state: Option<DeploymentState>,
        /// Filter by target environment
        #[arg(long, value_enum, ignore_case = true)]
        target: Option<DeploymentTarget>,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get deployment details
    Get {
        /// Deployment ID or URL
        id: String,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List {
        /// Number of results to return
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        /// Search projects by name
        #[arg(long)]
        search: Option<String>,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get project details
    Get {
        /// Project ID or name
        id: String,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// List domains
    List {
        /// Number of results to return
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Get deployment logs and events
    Get {
        /// Deployment ID
        deployment_id: String,
        /// Number of events to return
        #[arg(long, default_value_t = DEFAULT_EVENT_LIMIT)]
        limit: u32,
        /// Ask the API to follow the log (single request, not streamed)
        #[arg(long)]
        follow: bool,
        /// Include build events
        #[arg(long)]
        builds: bool,
        /// Team ID (overrides config)
        #[arg(long)]
        team: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_lowercase_state_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["vercelctl", "deployments", "list", "--state", "ready"]).unwrap();
        match cli.command {
            Some(Commands::Deployments {
                command: DeploymentCommands::List { state, limit, .. },
            }) => {
                assert_eq!(state, Some(DeploymentState::Ready));
                assert_eq!(limit, 20);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn given_logs_without_limit_when_parsing_then_default_100() {
        let cli = Cli::try_parse_from(["vercelctl", "logs", "get", "dpl_1", "--follow"]).unwrap();
        match cli.command {
            Some(Commands::Logs {
                command: LogCommands::Get { limit, follow, .. },
            }) => {
                assert_eq!(limit, 100);
                assert!(follow);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn given_verbose_flags_when_parsing_then_counted() {
        let cli = Cli::try_parse_from(["vercelctl", "-vv", "config", "show"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
