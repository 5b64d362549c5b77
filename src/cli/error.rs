//! CLI-level errors (wraps application and infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("API token not configured.")]
    NotConfigured,

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Infra(InfraError::io("write output", e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::NotConfigured => crate::exitcode::CONFIG,
            CliError::Application(app) => application_exit_code(app),
            CliError::Infra(InfraError::Io { .. }) => crate::exitcode::IOERR,
        }
    }
}

fn application_exit_code(e: &ApplicationError) -> i32 {
    match e {
        ApplicationError::Api(api) if api.is_network() => crate::exitcode::UNAVAILABLE,
        ApplicationError::Api(_) => crate::exitcode::SOFTWARE,
        ApplicationError::Config { .. } => crate::exitcode::CONFIG,
        ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;

    #[test]
    fn given_network_error_when_mapping_then_unavailable() {
        let err: CliError = ApplicationError::Api(ApiError::network("refused")).into();
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(err.to_string(), "Request failed: refused");
    }

    #[test]
    fn given_http_error_when_mapping_then_nonzero() {
        let err: CliError = ApplicationError::Api(ApiError::http(401, "{}")).into();
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_not_configured_when_mapping_then_config_exit() {
        assert_eq!(CliError::NotConfigured.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_config_error_when_mapping_then_config_exit() {
        let err: CliError = ApplicationError::Config {
            message: "parse config.toml".into(),
        }
        .into();
        assert!(matches!(err, CliError::Application(_)));
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_write_failure_when_mapping_then_ioerr() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CliError = io.into();
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }
}
