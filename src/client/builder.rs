use crate::client::core::IpregistryClient;
use crate::config::{
    env_parse, Config, ResponseFormat, API_KEY_ENV, BASE_URL_ENV, FORMAT_ENV, HOSTNAME_ENV,
    TIMEOUT_ENV,
};
use crate::transport::Transport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;

const KEYRING_SERVICE: &str = "ipregistry";
const KEYRING_USER: &str = "api_key";

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment (see [`crate::config`]); the API
/// key is looked up in the OS keyring before the environment.
#[derive(Default)]
pub struct IpregistryClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    hostname: Option<bool>,
    format: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl IpregistryClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base URL, e.g. [`crate::config::EU_BASE_URL`] or a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Ask IP lookups to resolve hostnames too.
    pub fn hostname(mut self, enable: bool) -> Self {
        self.hostname = Some(enable);
        self
    }

    /// Response format by name. Only `"json"` and `"xml"` are accepted; anything
    /// else fails at [`build`](Self::build).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Send requests through a custom transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolves every setting and validates the result.
    pub fn build_config(&self) -> Result<Config> {
        let api_key = self
            .api_key
            .clone()
            .or_else(keyring_api_key)
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_details(format!(
                            "pass one to the builder, store it in the keyring or set {}",
                            API_KEY_ENV
                        )),
                )
            })?;

        let format: ResponseFormat = match self
            .format
            .clone()
            .or_else(|| std::env::var(FORMAT_ENV).ok())
        {
            Some(name) => name.parse()?,
            None => ResponseFormat::default(),
        };

        let mut config = Config::new(api_key).with_format(format);
        if let Some(url) = self
            .base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
        {
            config = config.with_base_url(url);
        }
        if let Some(secs) = self.timeout_secs.or_else(|| env_parse(TIMEOUT_ENV)) {
            config = config.with_timeout_secs(secs);
        }
        if let Some(flag) = self.hostname.or_else(|| env_parse(HOSTNAME_ENV)) {
            config = config.with_hostname(flag);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<IpregistryClient> {
        let config = self.build_config()?;
        match self.transport {
            Some(transport) => IpregistryClient::with_transport(config, transport),
            None => IpregistryClient::new(config),
        }
    }
}

/// Best-effort keyring read; a missing entry or an unavailable keyring is not an error.
fn keyring_api_key() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok().filter(|key| !key.trim().is_empty())
}
