//! CLI layer: argument parsing, command dispatch and terminal rendering

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod render;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::{execute_command, execute_command_to};
pub use error::{CliError, CliResult};
