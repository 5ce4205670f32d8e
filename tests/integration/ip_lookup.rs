//! Integration tests for IP lookups

use crate::integration::mock_server::{hostname_param, key_param, MockServerFixture};
use ipregistry_sdk::{ApiErrorKind, Error, IpregistryClient, ResponseFormat, TransportError};
use mockito::Matcher;
use serde_json::json;

const GOOGLE_DNS: &str = r#"{
    "ip": "8.8.8.8",
    "type": "IPv4",
    "hostname": null,
    "connection": { "asn": 15169, "organization": "Google LLC", "type": "hosting" },
    "location": {
        "country": { "code": "US", "name": "United States", "borders": ["CA", "MX"] },
        "city": "Mountain View",
        "latitude": 37.42301,
        "in_eu": false
    },
    "security": { "is_cloud_provider": true, "is_vpn": false },
    "time_zone": { "id": "America/Los_Angeles", "offset": -25200 }
}"#;

#[tokio::test]
async fn test_single_lookup() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/8.8.8.8", vec![hostname_param(false)], GOOGLE_DNS)
        .await;

    let resp = fixture.client().ip().lookup("8.8.8.8").await.unwrap();
    mock.assert_async().await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.ip().as_deref(), Some("8.8.8.8"));
    assert_eq!(resp.ip_type().as_deref(), Some("IPv4"));
    assert!(resp.hostname().is_none());
    assert_eq!(resp.connection_asn(), Some(15169));
    assert_eq!(resp.country_code().as_deref(), Some("US"));
    assert_eq!(resp.country_borders(), vec![json!("CA"), json!("MX")]);
    assert_eq!(resp.latitude(), Some(37.42301));
    assert!(resp.is_cloud_provider());
    assert!(!resp.is_vpn());
    assert!(!resp.is_in_eu());
    assert_eq!(resp.time_zone_offset(), Some(-25200));
    assert!(resp.carrier_name().is_none());
    assert_eq!(
        resp.raw_response().header("content-type"),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_hostname_flag_is_forwarded() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/1.1.1.1",
            vec![hostname_param(true)],
            r#"{"ip":"1.1.1.1","hostname":"one.one.one.one"}"#,
        )
        .await;

    let client = fixture.client_with(true, "json");
    let resp = client.ip().lookup("1.1.1.1").await.unwrap();
    mock.assert_async().await;
    assert_eq!(resp.hostname().as_deref(), Some("one.one.one.one"));
}

#[tokio::test]
async fn test_ipv6_lookup() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/2001:4860:4860::8888",
            vec![hostname_param(false)],
            r#"{"ip":"2001:4860:4860::8888","type":"IPv6"}"#,
        )
        .await;

    let resp = fixture
        .client()
        .ip()
        .lookup("2001:4860:4860::8888")
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(resp.ip_type().as_deref(), Some("IPv6"));
}

#[tokio::test]
async fn test_batch_lookup() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_batch(
            "/",
            vec![hostname_param(false)],
            json!(["8.8.8.8", "1.1.1.1"]),
            r#"{"results":[{"ip":"8.8.8.8","location":{"country":{"code":"US"}}},{"ip":"1.1.1.1","location":{"country":{"code":"AU"}}}]}"#,
        )
        .await;

    let resp = fixture
        .client()
        .ip()
        .batch_lookup(&["8.8.8.8", "1.1.1.1"])
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(resp.get("results.0.ip").as_deref(), Some(&json!("8.8.8.8")));
    assert_eq!(resp.get("results.1.ip").as_deref(), Some(&json!("1.1.1.1")));
    let results = resp.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].country_code().as_deref(), Some("AU"));
}

#[tokio::test]
async fn test_batch_lookup_accepts_owned_strings() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_batch(
            "/",
            vec![hostname_param(false)],
            json!(["9.9.9.9"]),
            r#"{"results":[{"ip":"9.9.9.9"}]}"#,
        )
        .await;

    let ips = vec!["9.9.9.9".to_string()];
    let resp = fixture.client().ip().batch_lookup(&ips).await.unwrap();
    mock.assert_async().await;
    assert_eq!(resp.results()[0].ip().as_deref(), Some("9.9.9.9"));
}

#[tokio::test]
async fn test_origin_lookup() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/", vec![hostname_param(false)], r#"{"ip":"203.0.113.7"}"#)
        .await;

    let resp = fixture.client().ip().origin_lookup().await.unwrap();
    mock.assert_async().await;
    assert_eq!(resp.ip().as_deref(), Some("203.0.113.7"));
}

#[tokio::test]
async fn test_forbidden_ip() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_status(
            "GET",
            "/8.8.8.8",
            vec![hostname_param(false)],
            403,
            r#"{"code":"FORBIDDEN_IP","message":"Your IP is not allowed.","resolution":"Check your IP settings."}"#,
        )
        .await;

    let err = fixture.client().ip().lookup("8.8.8.8").await.unwrap_err();
    let api = err.api_error().expect("classified API error");
    assert_eq!(api.kind(), ApiErrorKind::ForbiddenIp);
    assert_eq!(
        api.message(),
        "The request was forbidden because your IP address is not allowed: Your IP is not allowed."
    );
    assert_eq!(api.error_code(), Some("FORBIDDEN_IP"));
    assert_eq!(api.resolution(), Some("Check your IP settings."));
    assert_eq!(api.status(), 403);
    assert!(!api.is_retryable());
}

#[tokio::test]
async fn test_invalid_ip_address() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_status(
            "GET",
            "/not-an-ip",
            vec![hostname_param(false)],
            400,
            r#"{"code":"INVALID_IP_ADDRESS","message":"'not-an-ip' is not a valid IP."}"#,
        )
        .await;

    let err = fixture.client().ip().lookup("not-an-ip").await.unwrap_err();
    assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidIpAddress));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_xml_format() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/8.8.8.8")
            .match_query(Matcher::AllOf(vec![hostname_param(false), key_param()]))
            .match_header("accept", "application/xml")
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body(
                "<response><ip>8.8.8.8</ip><location><country><code>US</code></country><in_eu>false</in_eu></location></response>",
            )
            .create_async()
            .await
    };

    let resp = fixture
        .client_with(false, "xml")
        .ip()
        .lookup("8.8.8.8")
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(resp.format(), ResponseFormat::Xml);
    assert_eq!(resp.country_code().as_deref(), Some("US"));
    assert!(!resp.is_in_eu());
    assert!(resp.data().as_xml().is_some());
}

#[tokio::test]
async fn test_xml_error_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/10.0.0.1")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/xml")
            .with_body(
                "<error><code>RESERVED_IP_ADDRESS</code><message>Private range.</message><resolution>Use a public IP.</resolution></error>",
            )
            .create_async()
            .await
    };

    let err = fixture
        .client_with(false, "xml")
        .ip()
        .lookup("10.0.0.1")
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.kind(), ApiErrorKind::ReservedIpAddress);
    assert_eq!(
        api.message(),
        "The provided IP address is reserved and cannot be looked up: Private range."
    );
    assert_eq!(api.resolution(), Some("Use a public IP."));
}

#[tokio::test]
async fn test_connection_refused() {
    let client = IpregistryClient::builder()
        .api_key("tryout")
        .base_url("http://127.0.0.1:1")
        .timeout_secs(2)
        .format("json")
        .hostname(false)
        .build()
        .unwrap();

    let err = client.ip().lookup("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Connection(_))));
    assert!(err.to_string().starts_with("Connection error: "));
    assert!(err.api_error().is_none());
    assert!(std::error::Error::source(&err).is_some());
}
