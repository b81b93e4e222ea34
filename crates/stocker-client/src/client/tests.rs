//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert!(config.api_key.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig {
        base_url: "http://api.example.com:9000".to_string(),
        api_key: Some("key".to_string()),
        timeout: Duration::from_secs(60),
    };

    assert_eq!(config.base_url, "http://api.example.com:9000");
    assert_eq!(config.api_key.as_deref(), Some("key"));
    assert_eq!(config.timeout, Duration::from_secs(60));
}

// ============================================================================
// StockerClient Creation Tests
// ============================================================================

#[test]
fn test_stocker_client_new() {
    let client = StockerClient::new(ClientConfig::default());

    assert!(client.is_ok());
}

#[test]
fn test_stocker_client_base_url_trimmed() {
    let client = StockerClient::with_base_url("http://localhost:8080/").unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_stocker_client_with_api_key() {
    let client = StockerClient::with_base_url("http://localhost:8080")
        .unwrap()
        .with_api_key("test-api-key");

    assert_eq!(client.api_key.as_deref(), Some("test-api-key"));
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_build_url_without_params() {
    let client = StockerClient::with_base_url("http://localhost:8080").unwrap();

    let url = client.build_url("/api/candlesticks/7", &[]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api/candlesticks/7");
}

#[test]
fn test_build_url_with_pagination() {
    let client = StockerClient::with_base_url("http://localhost:8080").unwrap();

    let url = client
        .build_url(
            "/api/candlesticks",
            &[("page", "1".to_string()), ("size", "50".to_string())],
        )
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/api/candlesticks?page=1&size=50"
    );
}

#[test]
fn test_build_url_encodes_symbol() {
    let client = StockerClient::with_base_url("http://localhost:8080").unwrap();

    let url = client
        .build_url(
            "/api/candlesticks/search/by-symbol",
            &[("symbol", "A&B ST".to_string())],
        )
        .unwrap();
    assert_eq!(url.query(), Some("symbol=A%26B+ST"));
}

#[test]
fn test_build_url_invalid_base() {
    let client = StockerClient::with_base_url("not a url").unwrap();

    assert!(matches!(
        client.build_url("/api/candlesticks", &[]),
        Err(Error::InvalidUrl(_))
    ));
}
