//! Client configuration.
//!
//! A [`Config`] is built once and shared read-only by every endpoint caller.
//! Values not set explicitly can come from the environment:
//!
//! | Variable                  | Meaning                          | Default                      |
//! |---------------------------|----------------------------------|------------------------------|
//! | `IPREGISTRY_API_KEY`      | API key (after the OS keyring)   | none, required               |
//! | `IPREGISTRY_BASE_URL`     | API base URL                     | `https://api.ipregistry.co`  |
//! | `IPREGISTRY_TIMEOUT_SECS` | request timeout in seconds       | `5`                          |
//! | `IPREGISTRY_HOSTNAME`     | enable hostname lookups          | `false`                      |
//! | `IPREGISTRY_FORMAT`       | `json` or `xml`                  | `json`                       |

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default Ipregistry API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.ipregistry.co";

/// Base URL that keeps requests inside the European Union.
pub const EU_BASE_URL: &str = "https://eu.api.ipregistry.co";

/// Base URL that keeps requests inside Great Britain.
pub const GB_BASE_URL: &str = "https://gb.api.ipregistry.co";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const API_KEY_ENV: &str = "IPREGISTRY_API_KEY";
pub const BASE_URL_ENV: &str = "IPREGISTRY_BASE_URL";
pub const TIMEOUT_ENV: &str = "IPREGISTRY_TIMEOUT_SECS";
pub const HOSTNAME_ENV: &str = "IPREGISTRY_HOSTNAME";
pub const FORMAT_ENV: &str = "IPREGISTRY_FORMAT";

/// Payload format requested from the API and used to parse its responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Value sent in the `Accept` header.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(Error::invalid_argument_with_context(
                "Invalid output format. Must be 'json' or 'xml'.",
                ErrorContext::new()
                    .with_field_path("format")
                    .with_details(format!("got '{}'", other)),
            )),
        }
    }
}

/// Immutable client settings.
///
/// Deserialized values go through [`Config::validate`] like every other way of
/// building one.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct Config {
    api_key: String,
    base_url: String,
    timeout_secs: u64,
    hostname: bool,
    format: ResponseFormat,
}

/// Serialized shape of [`Config`], before validation.
#[derive(Deserialize)]
struct ConfigFile {
    api_key: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    #[serde(default)]
    hostname: bool,
    #[serde(default)]
    format: ResponseFormat,
}

impl TryFrom<ConfigFile> for Config {
    type Error = Error;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let config = Config {
            api_key: file.api_key,
            base_url: file.base_url,
            timeout_secs: file.timeout_secs,
            hostname: file.hostname,
            format: file.format,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Configuration with the given key and every other setting at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            hostname: false,
            format: ResponseFormat::Json,
        }
    }

    /// Configuration read entirely from `IPREGISTRY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_details(format!("set {}", API_KEY_ENV)),
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }
        if let Some(secs) = env_parse::<u64>(TIMEOUT_ENV) {
            config.timeout_secs = secs;
        }
        if let Some(flag) = env_parse::<bool>(HOSTNAME_ENV) {
            config.hostname = flag;
        }
        if let Ok(format) = std::env::var(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_hostname(mut self, enable: bool) -> Self {
        self.hostname = enable;
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Whether IP lookups ask the API to resolve hostnames.
    pub fn hostname(&self) -> bool {
        self.hostname
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Checks the settings a client cannot work without.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key must not be empty",
                ErrorContext::new().with_field_path("api_key"),
            ));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                "Base URL is not a valid URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string()),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "Base URL must be an http(s) URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "Timeout must be at least one second",
                ErrorContext::new().with_field_path("timeout_secs"),
            ));
        }
        Ok(())
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("hostname", &self.hostname)
            .field("format", &self.format)
            .finish()
    }
}

pub(crate) fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}
