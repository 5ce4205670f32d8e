//! Autonomous System lookups.

use crate::client::core::IpregistryClient;
use crate::response::ApiResponse;
use crate::Result;
use reqwest::Method;
use serde_json::{json, Value};

/// ASN lookup calls. Obtained from [`IpregistryClient::asn`].
#[derive(Debug, Clone, Copy)]
pub struct AsnLookup<'a> {
    client: &'a IpregistryClient,
}

impl<'a> AsnLookup<'a> {
    pub(crate) fn new(client: &'a IpregistryClient) -> Self {
        Self { client }
    }

    /// Looks up `AS{asn}`, e.g. `lookup(15169)` for Google.
    pub async fn lookup(&self, asn: u32) -> Result<ApiResponse> {
        self.client
            .request(Method::GET, vec![format!("AS{}", asn)], vec![], None)
            .await
    }

    /// Looks up several ASNs in one request. The body is a plain numeric array;
    /// entries come back under `results`.
    pub async fn batch_lookup(&self, asns: &[u32]) -> Result<ApiResponse> {
        let body = Value::Array(asns.iter().map(|asn| json!(asn)).collect());
        self.client
            .request(Method::POST, vec![], vec![], Some(body))
            .await
    }

    /// Looks up the ASN of the address the request originates from.
    pub async fn origin_lookup(&self) -> Result<ApiResponse> {
        self.client
            .request(Method::GET, vec!["AS".to_string()], vec![], None)
            .await
    }
}
