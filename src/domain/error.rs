//! Normalized API error (no external dependencies beyond serde_json)

use serde_json::Value;
use thiserror::Error;

/// Where a failed call broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCause {
    /// Server answered with a non-2xx status.
    Http { status: u16 },
    /// No response was received (DNS, refused connection, timeout).
    Network,
}

/// The single error shape a request ever surfaces to callers.
///
/// Transport errors are never passed through; they are flattened into
/// a message and a cause before leaving the executor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub cause: ErrorCause,
}

impl ApiError {
    /// Build an HTTP error from a status and the raw response body.
    ///
    /// The body is embedded as compact JSON. Non-JSON text is embedded as
    /// a JSON string literal.
    pub fn http(status: u16, body: &str) -> Self {
        let serialized = match serde_json::from_str::<Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => Value::String(body.to_string()).to_string(),
        };
        Self {
            message: format!("API Error: {status} - {serialized}"),
            cause: ErrorCause::Http { status },
        }
    }

    /// Build a network error from the transport's message.
    pub fn network(transport_message: impl AsRef<str>) -> Self {
        Self {
            message: format!("Request failed: {}", transport_message.as_ref()),
            cause: ErrorCause::Network,
        }
    }

    /// HTTP status, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self.cause {
            ErrorCause::Http { status } => Some(status),
            ErrorCause::Network => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self.cause, ErrorCause::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_json_body_when_http_error_then_message_has_status_and_body() {
        let err = ApiError::http(404, r#"{"error":"not found"}"#);
        assert!(err.message.contains("404"));
        assert!(err.message.contains("not found"));
        assert_eq!(err.message, r#"API Error: 404 - {"error":"not found"}"#);
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn given_pretty_json_body_when_http_error_then_body_is_compacted() {
        let err = ApiError::http(400, "{\n  \"code\": \"bad\"\n}");
        assert_eq!(err.message, r#"API Error: 400 - {"code":"bad"}"#);
    }

    #[test]
    fn given_plain_text_body_when_http_error_then_body_is_quoted() {
        let err = ApiError::http(502, "Bad Gateway");
        assert_eq!(err.message, r#"API Error: 502 - "Bad Gateway""#);
    }

    #[test]
    fn given_transport_message_when_network_error_then_no_status() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.message, "Request failed: connection refused");
        assert_eq!(err.status(), None);
        assert!(err.is_network());
        assert_eq!(err.to_string(), err.message);
    }
}
