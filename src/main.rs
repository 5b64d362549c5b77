use std::io;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use vercelctl::cli::args::{Cli, Commands};
use vercelctl::cli::commands::{execute_command, needs_settings};
use vercelctl::application::ApplicationError;
use vercelctl::cli::output;
use vercelctl::cli::CliError;
use vercelctl::config::Settings;
use vercelctl::exitcode;
use vercelctl::infrastructure::di::ServiceContainer;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    setup_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(*shell, &mut cmd);
            return;
        }
        None => {
            let _ = Cli::command().print_help();
            std::process::exit(exitcode::USAGE);
        }
        _ => {}
    }

    let settings = if needs_settings(&cli) {
        match Settings::load() {
            Ok(settings) => settings,
            Err(e) => {
                output::error(&e);
                output::hint("Fix the file or run: vercelctl config clear");
                std::process::exit(exitcode::CONFIG);
            }
        }
    } else {
        Settings::default()
    };

    let container = ServiceContainer::new(settings);

    if let Err(e) = execute_command(&cli, &container) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

fn report(e: &CliError) {
    output::error(e);
    match e {
        CliError::NotConfigured => {
            output::hint("Run: vercelctl config set --token YOUR_TOKEN");
            output::hint("Get a token at https://vercel.com/account/tokens");
        }
        CliError::Application(ApplicationError::Config { .. }) => {
            output::hint("Fix the file or run: vercelctl config clear");
        }
        _ => {}
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -v -v -v");
            LevelFilter::TRACE
        }
    };

    // dependencies only speak up at trace
    let deps = if filter == LevelFilter::TRACE {
        "trace"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{deps},vercelctl={filter}")));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(env_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
