//! # ipregistry-sdk
//!
//! Async client for the [Ipregistry](https://ipregistry.co) IP geolocation and
//! threat-intelligence API.
//!
//! ## Overview
//!
//! The client looks up IP addresses, Autonomous System Numbers and User-Agent
//! strings. Every call is a single HTTP request; its answer comes back either as
//! an [`ApiResponse`] with typed getters over the JSON or XML payload, or as an
//! [`Error`] whose [`ApiErrorKind`] says exactly what the API rejected.
//!
//! ## Key Features
//!
//! - **Typed getters**: nearly a hundred named accessors (`country_code`, `is_vpn`, `asn_name`, ...)
//!   plus dotted-path access for everything else
//! - **JSON or XML**: one [`ResponseFormat`] setting drives the `Accept` header and parsing
//! - **Classified errors**: status and upstream code map to a closed [`ApiErrorKind`] set
//! - **Pluggable transport**: [`transport::Transport`] is the seam to the HTTP stack
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipregistry_sdk::{ApiErrorKind, IpregistryClient};
//!
//! #[tokio::main]
//! async fn main() -> ipregistry_sdk::Result<()> {
//!     let client = IpregistryClient::builder()
//!         .api_key("your-api-key")
//!         .hostname(true)
//!         .build()?;
//!
//!     let response = client.ip().lookup("8.8.8.8").await?;
//!     println!("{:?} {:?}", response.country_code(), response.city());
//!
//!     match client.asn().lookup(0).await {
//!         Ok(asn) => println!("{:?}", asn.asn_name()),
//!         Err(e) if e.api_kind() == Some(ApiErrorKind::ReservedAsn) => println!("reserved"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and endpoint callers |
//! | [`config`] | Settings, formats and regional base URLs |
//! | [`response`] | Parsed responses and the named getter table |
//! | [`error_code`] | API error kinds and their classification table |
//! | [`transport`] | HTTP transport seam and its `reqwest` implementation |
//! | [`utils`] | Dotted-path field access |

pub mod client;
pub mod config;
pub mod error_code;
pub mod response;
pub mod transport;
pub mod utils;

// Re-export main types for convenience
pub use client::{AsnLookup, IpLookup, IpregistryClient, IpregistryClientBuilder, UserAgentParser};
pub use config::{Config, ResponseFormat, DEFAULT_BASE_URL, EU_BASE_URL, GB_BASE_URL};
pub use error_code::ApiErrorKind;
pub use response::{ApiResponse, FieldKind, FieldSpec, FieldValue, ParsedTree, XmlElement, FIELDS};
pub use transport::{RawResponse, Transport, TransportError};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, Error, ErrorContext};
