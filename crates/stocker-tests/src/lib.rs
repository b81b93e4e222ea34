//! Integration tests for the Stocker API.
//!
//! These tests require the API server to be running against PostgreSQL with
//! `fixtures/candlesticks.sql` loaded and `API_KEY` among its valid keys.
//! Configure the server URL via `API_BASE_URL` (default:
//! `http://localhost:8080`) and the key via `API_KEY` (default:
//! `test-api-key`).
//!
//! ```bash
//! psql "$DATABASE_URL" -f migrations/20250720000000_create_candlestick.sql \
//!                      -f crates/stocker-tests/fixtures/candlesticks.sql
//! APP_API_VALID_KEYS=test-api-key cargo run &
//! cargo test -p stocker-tests --features integration-tests
//! ```

use std::time::Duration;
use stocker_client::{ClientConfig, StockerClient};

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Gets the API key from environment or uses default.
#[must_use]
pub fn get_api_key() -> String {
    std::env::var("API_KEY").unwrap_or_else(|_| "test-api-key".to_string())
}

/// Creates a client that sends `api_key`, or no key at all.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_client(api_key: Option<String>) -> Result<StockerClient, stocker_client::Error> {
    StockerClient::new(ClientConfig {
        base_url: get_api_url(),
        api_key,
        timeout: Duration::from_secs(10),
    })
}

/// Creates a test client configured with the valid API key.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<StockerClient, stocker_client::Error> {
    create_client(Some(get_api_key()))
}
