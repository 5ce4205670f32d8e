//! HTTP transport seam.
//!
//! The client core only needs "send this request, give me status + body".
//! [`HttpTransport`] does that over `reqwest`; tests and embedders can plug in
//! their own [`Transport`].

pub mod http;

pub use http::{HttpTransport, TransportError};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// One outbound API call, before the base URL is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// Path segments below the base URL; each is percent-encoded on its own.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    /// JSON body, sent for batch endpoints.
    pub body: Option<serde_json::Value>,
    pub accept: &'static str,
    /// Correlation id, sent as `x-request-id`.
    pub request_id: String,
}

impl TransportRequest {
    /// The request path as the API sees it, e.g. `/AS15169` or `/`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Status, headers and body of an HTTP response, fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. `"Forbidden"`.
    pub fn reason(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Sends a single request and returns the response, whatever its status.
///
/// Implementations must not interpret non-2xx statuses; classification
/// happens in the client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}
