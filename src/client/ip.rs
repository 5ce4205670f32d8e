//! IP address lookups.

use crate::client::core::IpregistryClient;
use crate::response::ApiResponse;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// IP lookup calls. Obtained from [`IpregistryClient::ip`].
///
/// Every call sends the client's `hostname` flag.
#[derive(Debug, Clone, Copy)]
pub struct IpLookup<'a> {
    client: &'a IpregistryClient,
}

impl<'a> IpLookup<'a> {
    pub(crate) fn new(client: &'a IpregistryClient) -> Self {
        Self { client }
    }

    /// Looks up one address (IPv4 or IPv6). The address is not validated locally.
    pub async fn lookup(&self, ip: &str) -> Result<ApiResponse> {
        self.client
            .request(
                Method::GET,
                vec![ip.to_string()],
                self.client.hostname_query(),
                None,
            )
            .await
    }

    /// Looks up several addresses in one request; entries come back under `results`.
    pub async fn batch_lookup<S: AsRef<str>>(&self, ips: &[S]) -> Result<ApiResponse> {
        let body = Value::Array(
            ips.iter()
                .map(|ip| Value::String(ip.as_ref().to_string()))
                .collect(),
        );
        self.client
            .request(Method::POST, vec![], self.client.hostname_query(), Some(body))
            .await
    }

    /// Looks up the address the request originates from.
    pub async fn origin_lookup(&self) -> Result<ApiResponse> {
        self.client
            .request(Method::GET, vec![], self.client.hostname_query(), None)
            .await
    }
}
