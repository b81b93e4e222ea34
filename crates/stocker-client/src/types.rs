//! Response types for the Stocker API.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A fixed-interval OHLCV price record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    /// Record id.
    pub id: i32,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Traded volume.
    pub volume: i64,
    /// Interval start, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Ticker symbol.
    pub symbol: String,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page size.
    pub size: u32,
    /// Total number of elements.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Zero-based page index.
    pub number: u32,
}

/// One page of candlesticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandlestickPage {
    /// Candlesticks on this page.
    pub candlesticks: Vec<Candlestick>,
    /// Pagination metadata.
    pub page: PageMetadata,
}

/// Candlesticks matching a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandlestickList {
    /// Matching candlesticks.
    pub candlesticks: Vec<Candlestick>,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}
