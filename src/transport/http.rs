use super::{RawResponse, Transport, TransportRequest};
use crate::config::{env_parse, Config};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Proxy;
use std::time::Duration;
use url::Url;

/// `reqwest`-backed transport. Cheap to share; the connection pool lives inside.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            Error::configuration_with_context(
                "Base URL is not a valid URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string()),
            )
        })?;

        // Pool knobs stay env-only to keep the config surface small.
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .user_agent(concat!("ipregistry-sdk-rust/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(
                env_parse::<usize>("IPREGISTRY_HTTP_POOL_MAX_IDLE_PER_HOST").unwrap_or(8),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env_parse::<u64>("IPREGISTRY_HTTP_POOL_IDLE_TIMEOUT_SECS").unwrap_or(90),
            )));

        if let Ok(proxy_url) = std::env::var("IPREGISTRY_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                "Failed to create HTTP client",
                ErrorContext::new()
                    .with_source("transport")
                    .with_details(e.to_string()),
            )
        })?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, request: &TransportRequest) -> std::result::Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TransportError::other(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            segments.pop_if_empty();
            segments.extend(request.segments.iter());
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> std::result::Result<RawResponse, TransportError> {
        let url = self.url_for(&request)?;

        let mut req = self
            .client
            .request(request.method.clone(), url)
            .header(ACCEPT, request.accept)
            .header("x-request-id", request.request_id.as_str());
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(TransportError::Request)?;

        Ok(RawResponse::new(status, headers, body))
    }
}

/// Failure below the HTTP layer: no status code was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, TLS failure or timeout.
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The request could not be built, sent, or its body read.
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// Anything else, e.g. a response that could not be decoded or a URL that
    /// could not be built from the base.
    #[error("An error occurred during the API request: {message}")]
    Other {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TransportError {
    /// Wraps an arbitrary failure, keeping it as the source.
    pub fn other(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let source = source.into();
        TransportError::Other {
            message: source.to_string(),
            source,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            TransportError::Connection(err)
        } else if err.is_request() || err.is_builder() || err.is_body() || err.is_redirect() {
            TransportError::Request(err)
        } else {
            TransportError::other(err)
        }
    }
}
