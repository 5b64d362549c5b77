//! I/O boundary traits for testability
//!
//! The HTTP transport is abstracted so the executor's error
//! normalization can be tested with a scripted implementation.

use std::fmt;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{trace, warn};

use crate::domain::Method;

/// Fully resolved HTTP request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Whatever the server answered, regardless of status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// One network round trip. Implementations must not retry and must not
/// interpret the status code.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Blocking reqwest transport. A new client is built for every call,
/// so nothing is pooled between invocations.
#[derive(Debug, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let client = Client::builder().build().map_err(transport_err)?;

        let mut builder = client.request(Self::method(request.method), &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => body,
            // the status already says the call failed; keep it
            Err(e) if !(200..300).contains(&status) => {
                warn!("could not read body of {} response: {}", status, e);
                String::new()
            }
            Err(e) => return Err(transport_err(e)),
        };
        trace!("response status={} body_len={}", status, body.len());

        Ok(HttpResponse { status, body })
    }
}

fn transport_err(e: reqwest::Error) -> TransportError {
    TransportError {
        message: error_chain(&e),
    }
}

/// reqwest's top-level message is terse ("error sending request for url");
/// include the source chain so the cause (refused, DNS) is visible.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
