//! HTTP client for the Stocker API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// API key sent in the `X-API-Key` header.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Stocker candlestick API.
#[derive(Debug, Clone)]
pub struct StockerClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl StockerClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Creates a new client without an API key.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns a copy of this client that sends `api_key`.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)?
        } else {
            Url::parse_with_params(&raw, params)?
        };
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    // ========================================================================
    // Candlesticks
    // ========================================================================

    /// Lists candlesticks page by page.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_candlesticks(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<CandlestickPage, Error> {
        let mut params = Vec::new();
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = size {
            params.push(("size", size.to_string()));
        }

        let url = self.build_url("/api/candlesticks", &params)?;
        let resp = self.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a candlestick by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_candlestick(&self, id: i32) -> Result<Candlestick, Error> {
        let url = self.build_url(&format!("/api/candlesticks/{}", id), &[])?;
        let resp = self.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Finds candlesticks with exactly the given symbol.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn find_by_symbol(&self, symbol: &str) -> Result<CandlestickList, Error> {
        let url = self.build_url(
            "/api/candlesticks/search/by-symbol",
            &[("symbol", symbol.to_string())],
        )?;
        let resp = self.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        Err(match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::METHOD_NOT_ALLOWED => Error::MethodNotAllowed(message),
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}
