//! Ipregistry client.
//!
//! Keep the public surface small: one [`IpregistryClient`] plus one caller per
//! endpoint family. Implementation details are split into submodules under
//! `src/client/`.

pub mod asn;
pub mod builder;
pub mod core;
mod error_classification;
pub mod ip;
pub mod user_agent;

pub use asn::AsnLookup;
pub use builder::IpregistryClientBuilder;
pub use core::IpregistryClient;
pub use ip::IpLookup;
pub use user_agent::UserAgentParser;

pub(crate) use error_classification::classify_error_from_response;
