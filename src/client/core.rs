use crate::client::builder::IpregistryClientBuilder;
use crate::client::classify_error_from_response;
use crate::config::Config;
use crate::response::ApiResponse;
use crate::transport::{HttpTransport, Transport, TransportRequest};
use crate::Result;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Entry point to the Ipregistry API.
///
/// Cloning is cheap: the configuration and the transport (with its connection
/// pool) are shared.
#[derive(Clone)]
pub struct IpregistryClient {
    pub(crate) config: Arc<Config>,
    pub(crate) transport: Arc<dyn Transport>,
}

impl IpregistryClient {
    /// Client over the default `reqwest` transport.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// Client over a caller-provided transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn builder() -> IpregistryClientBuilder {
        IpregistryClientBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// IP address lookups.
    pub fn ip(&self) -> crate::client::ip::IpLookup<'_> {
        crate::client::ip::IpLookup::new(self)
    }

    /// Autonomous System lookups.
    pub fn asn(&self) -> crate::client::asn::AsnLookup<'_> {
        crate::client::asn::AsnLookup::new(self)
    }

    /// User-Agent parsing.
    pub fn user_agent(&self) -> crate::client::user_agent::UserAgentParser<'_> {
        crate::client::user_agent::UserAgentParser::new(self)
    }

    /// Sends one request and turns the answer into a response or a classified error.
    ///
    /// The API key is appended as the `key` query parameter here, so endpoint
    /// callers never handle it.
    pub(crate) async fn request(
        &self,
        method: Method,
        segments: Vec<String>,
        mut query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let format = self.config.format();
        query.push(("key".to_string(), self.config.api_key().to_string()));

        let request = TransportRequest {
            method,
            segments,
            query,
            body,
            accept: format.mime_type(),
            request_id: Uuid::new_v4().to_string(),
        };
        let request_id = request.request_id.clone();
        let method = request.method.clone();
        let path = request.path();

        debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            format = %format,
            "sending request"
        );
        let started = Instant::now();

        let raw = self.transport.send(request).await.map_err(|e| {
            warn!(request_id = %request_id, error = %e, "request failed before a response");
            e
        })?;
        debug!(request_id = %request_id, status = raw.status(), "received response");

        if raw.is_success() {
            let response = ApiResponse::new(raw, format)?;
            info!(
                request_id = %request_id,
                status = response.status(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "response parsed"
            );
            return Ok(response);
        }

        let err = classify_error_from_response(&raw, format, &method, &path);
        warn!(
            request_id = %request_id,
            status = err.status(),
            kind = %err.kind(),
            code = err.error_code().unwrap_or(""),
            "API returned an error"
        );
        Err(err.into())
    }

    /// `hostname` query parameter used by the IP endpoints.
    pub(crate) fn hostname_query(&self) -> Vec<(String, String)> {
        vec![("hostname".to_string(), self.config.hostname().to_string())]
    }
}

impl std::fmt::Debug for IpregistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpregistryClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
