//! Request executor
//!
//! Turns a `RequestDescriptor` into one authenticated HTTP call and maps
//! every failure onto `ApiError`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::{ConfigKey, ConfigProvider, DEFAULT_BASE_URL};
use crate::domain::{ApiError, RequestDescriptor};
use crate::infrastructure::traits::{HttpRequest, HttpTransport};

/// Executes API calls against the configured base url.
///
/// Holds no session state: credentials and base url are read from the
/// provider on every call.
pub struct RequestExecutor {
    config: Arc<dyn ConfigProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    pub fn new(config: Arc<dyn ConfigProvider>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Perform exactly one round trip and return the decoded body.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method(), path = descriptor.path()))]
    pub fn execute(&self, descriptor: &RequestDescriptor) -> Result<Value, ApiError> {
        let request = self.prepare(descriptor);
        debug!("sending {} {}", request.method, request.url);

        let response = self.transport.send(&request).map_err(|e| {
            warn!("transport failure: {e}");
            ApiError::network(&e.message)
        })?;

        if !response.is_success() {
            warn!("server answered {}", response.status);
            return Err(ApiError::http(response.status, &response.body));
        }

        Ok(decode_body(&response.body))
    }

    /// Resolve the descriptor against current configuration.
    pub fn prepare(&self, descriptor: &RequestDescriptor) -> HttpRequest {
        let base_url = self
            .config
            .get(ConfigKey::BaseUrl)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        match self.config.get(ConfigKey::ApiKey).filter(|k| !k.is_empty()) {
            Some(key) => headers.push(("Authorization".to_string(), format!("Bearer {key}"))),
            None => debug!("no api key configured, sending unauthenticated"),
        }

        HttpRequest {
            method: descriptor.method(),
            url: join_url(&base_url, descriptor.path()),
            headers,
            query: descriptor
                .query_params()
                .iter()
                .map(|(k, v)| (k.clone(), v.to_string()))
                .collect(),
            body: descriptor.body_json().cloned(),
        }
    }
}

/// Join base and path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Empty bodies decode to null, non-JSON text to a JSON string.
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
