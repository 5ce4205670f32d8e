//! User-Agent parsing.

use crate::client::core::IpregistryClient;
use crate::response::ApiResponse;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

const USER_AGENT_SEGMENT: &str = "user_agent";

/// User-Agent parsing calls. Obtained from [`IpregistryClient::user_agent`].
#[derive(Debug, Clone, Copy)]
pub struct UserAgentParser<'a> {
    client: &'a IpregistryClient,
}

impl<'a> UserAgentParser<'a> {
    pub(crate) fn new(client: &'a IpregistryClient) -> Self {
        Self { client }
    }

    /// Parses one header value. Sent as a batch of one, so the parsed entry
    /// is under `results.0`.
    pub async fn parse(&self, user_agent: &str) -> Result<ApiResponse> {
        self.batch_parse(&[user_agent]).await
    }

    pub async fn batch_parse<S: AsRef<str>>(&self, user_agents: &[S]) -> Result<ApiResponse> {
        let body = Value::Array(
            user_agents
                .iter()
                .map(|ua| Value::String(ua.as_ref().to_string()))
                .collect(),
        );
        self.client
            .request(
                Method::POST,
                vec![USER_AGENT_SEGMENT.to_string()],
                vec![],
                Some(body),
            )
            .await
    }

    /// Parses the `User-Agent` header of this very request.
    pub async fn origin_parse(&self) -> Result<ApiResponse> {
        self.client
            .request(
                Method::GET,
                vec![USER_AGENT_SEGMENT.to_string()],
                vec![],
                None,
            )
            .await
    }
}
