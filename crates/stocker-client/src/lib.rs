//! HTTP client library for the Stocker candlestick API.
//!
//! This crate provides a typed HTTP client for the read-only candlestick
//! endpoints. Requests carry the `X-API-Key` header when a key is configured.
//!
//! # Example
//!
//! ```no_run
//! use stocker_client::{ClientConfig, StockerClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stocker_client::Error> {
//!     let client = StockerClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         api_key: Some("my-key".into()),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let found = client.find_by_symbol("BOL.ST").await?;
//!     println!("{} candlesticks", found.candlesticks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{API_KEY_HEADER, ClientConfig, StockerClient};
pub use error::Error;
pub use types::*;
