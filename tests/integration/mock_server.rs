//! Mock HTTP server setup for integration tests

use ipregistry_sdk::IpregistryClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const TEST_KEY: &str = "tryout";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// JSON client pointed at the mock server
    pub fn client(&self) -> IpregistryClient {
        self.client_with(false, "json")
    }

    pub fn client_with(&self, hostname: bool, format: &str) -> IpregistryClient {
        IpregistryClient::builder()
            .api_key(TEST_KEY)
            .base_url(&self.base_url)
            .hostname(hostname)
            .format(format)
            .build()
            .expect("client should build")
    }

    /// Mock for a successful JSON answer; the API key must be present in the query.
    pub async fn mock_json(&self, method: &str, path: &str, query: Vec<Matcher>, body: &str) -> Mock {
        self.mock_status(method, path, query, 200, body).await
    }

    /// Mock for any status with a JSON body.
    pub async fn mock_status(
        &self,
        method: &str,
        path: &str,
        mut query: Vec<Matcher>,
        status: usize,
        body: &str,
    ) -> Mock {
        query.push(key_param());
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_query(Matcher::AllOf(query))
            .match_header("accept", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

impl MockServerFixture {
    /// Mock for a batch POST whose JSON body must equal `expected_body`.
    pub async fn mock_batch(
        &self,
        path: &str,
        mut query: Vec<Matcher>,
        expected_body: serde_json::Value,
        body: &str,
    ) -> Mock {
        query.push(key_param());
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .match_query(Matcher::AllOf(query))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn key_param() -> Matcher {
    Matcher::UrlEncoded("key".into(), TEST_KEY.into())
}

pub fn hostname_param(enabled: bool) -> Matcher {
    Matcher::UrlEncoded("hostname".into(), enabled.to_string())
}
