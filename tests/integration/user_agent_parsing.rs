//! Integration tests for User-Agent parsing

use crate::integration::mock_server::MockServerFixture;
use ipregistry_sdk::ApiErrorKind;
use serde_json::json;

const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const CHROME_RESULT: &str = r#"{"results":[{
    "header": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "name": "Chrome",
    "type": "browser",
    "version": "124.0.0.0",
    "version_major": "124",
    "device": { "brand": null, "name": "Desktop", "type": "desktop" },
    "engine": { "name": "Blink", "type": "browser", "version": "124.0" },
    "os": { "name": "Windows", "type": "desktop", "version": "10" }
}]}"#;

#[tokio::test]
async fn test_single_parse_goes_through_batch() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_batch("/user_agent", vec![], json!([CHROME_UA]), CHROME_RESULT)
        .await;

    let resp = fixture.client().user_agent().parse(CHROME_UA).await.unwrap();
    mock.assert_async().await;

    assert_eq!(resp.get("results.0.name").as_deref(), Some(&json!("Chrome")));
    assert_eq!(
        resp.get("results.0.os.name").as_deref(),
        Some(&json!("Windows"))
    );
    assert_eq!(resp.results().len(), 1);
}

#[tokio::test]
async fn test_batch_parse() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_batch(
            "/user_agent",
            vec![],
            json!(["curl/8.5.0", "Wget/1.21"]),
            r#"{"results":[{"name":"curl","type":"library"},{"name":"Wget","type":"library"}]}"#,
        )
        .await;

    let resp = fixture
        .client()
        .user_agent()
        .batch_parse(&["curl/8.5.0", "Wget/1.21"])
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(resp.get("results.1.name").as_deref(), Some(&json!("Wget")));
}

#[tokio::test]
async fn test_origin_parse() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/user_agent",
            vec![],
            r#"{"user_agent":{"header":"reqwest","name":"reqwest","type":"library","device":{"brand":null},"os":{"name":null}}}"#,
        )
        .await;

    let resp = fixture.client().user_agent().origin_parse().await.unwrap();
    mock.assert_async().await;
    assert_eq!(resp.user_agent_name().as_deref(), Some("reqwest"));
    assert_eq!(resp.user_agent_type().as_deref(), Some("library"));
    assert!(resp.device_brand().is_none());
    assert!(resp.os_name().is_none());
}

#[tokio::test]
async fn test_too_many_user_agents() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_status(
            "POST",
            "/user_agent",
            vec![],
            400,
            r#"{"code":"TOO_MANY_USER_AGENTS","message":"At most 256 User-Agents per request."}"#,
        )
        .await;

    let many: Vec<String> = (0..300).map(|i| format!("agent/{}", i)).collect();
    let err = fixture
        .client()
        .user_agent()
        .batch_parse(&many)
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.kind(), ApiErrorKind::TooManyUserAgents);
    assert_eq!(
        api.message(),
        "Too many User-Agents were provided in the batch request: At most 256 User-Agents per request."
    );
}

#[tokio::test]
async fn test_server_error_without_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/user_agent")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_header("content-type", "text/html")
            .with_body("<html><body>Internal error</body></html>")
            .create_async()
            .await
    };

    let err = fixture
        .client()
        .user_agent()
        .parse("curl/8.5.0")
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.kind(), ApiErrorKind::Generic);
    assert_eq!(
        api.message(),
        "HTTP 500 Internal Server Error returned for POST /user_agent"
    );
    assert!(api.is_retryable());
}
