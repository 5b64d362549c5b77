//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::ApiError;

/// Application errors wrap the normalized API error and add
/// configuration and orchestration concerns.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
