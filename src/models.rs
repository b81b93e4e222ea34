//! Request and response models for the REST API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Default number of candlesticks per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound for a requested page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A fixed-interval OHLCV price record for a ticker symbol.
///
/// No ordering between `low`, `open`, `close` and `high` is enforced; the
/// values are served exactly as the ingestion process stored them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candlestick {
    /// Surrogate primary key.
    pub id: i32,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Highest price in the interval.
    pub high: f64,
    /// Lowest price in the interval.
    pub low: f64,
    /// Traded volume.
    pub volume: i64,
    /// Interval start, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Ticker symbol (e.g., "BOL.ST").
    pub symbol: String,
}

/// A candlestick that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandlestick {
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
    /// Highest price in the interval.
    pub high: f64,
    /// Lowest price in the interval.
    pub low: f64,
    /// Traded volume.
    pub volume: i64,
    /// Interval start, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Ticker symbol.
    pub symbol: String,
}

impl NewCandlestick {
    /// Creates a new candlestick record in `open, close, high, low` order.
    #[must_use]
    pub fn new(
        open: f64,
        close: f64,
        high: f64,
        low: f64,
        volume: i64,
        timestamp: i64,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            open,
            close,
            high,
            low,
            volume,
            timestamp,
            symbol: symbol.into(),
        }
    }

    /// Attaches a generated id.
    #[must_use]
    pub fn with_id(self, id: i32) -> Candlestick {
        Candlestick {
            id,
            open: self.open,
            close: self.close,
            high: self.high,
            low: self.low,
            volume: self.volume,
            timestamp: self.timestamp,
            symbol: self.symbol,
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Query parameters for paginated listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default: 0).
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size (default: 20, max: 1000).
    #[serde(default)]
    pub size: Option<u32>,
}

/// A normalized page request passed to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub number: u32,
    /// Page size, always in `1..=MAX_PAGE_SIZE`.
    pub size: u32,
}

impl PageRequest {
    /// Number of rows to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        let size = match query.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        Self {
            number: query.page.unwrap_or(0),
            size,
        }
    }
}

/// A slice of a larger result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// The request that produced this page.
    pub request: PageRequest,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMetadata {
    /// Requested page size.
    pub size: u32,
    /// Total number of elements.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub number: u32,
}

impl PageMetadata {
    /// Builds metadata for a page request and a total element count.
    #[must_use]
    pub fn new(request: PageRequest, total_elements: u64) -> Self {
        Self {
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size)),
            number: request.number,
        }
    }
}

// ============================================================================
// Candlestick Responses
// ============================================================================

/// Response for the paginated candlestick listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandlestickPageResponse {
    /// Candlesticks on this page.
    pub candlesticks: Vec<Candlestick>,
    /// Pagination metadata.
    pub page: PageMetadata,
}

impl From<Page<Candlestick>> for CandlestickPageResponse {
    fn from(page: Page<Candlestick>) -> Self {
        Self {
            page: PageMetadata::new(page.request, page.total),
            candlesticks: page.items,
        }
    }
}

/// Response for a candlestick search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandlestickListResponse {
    /// Matching candlesticks.
    pub candlesticks: Vec<Candlestick>,
}

/// Query parameters for the by-symbol search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SymbolQuery {
    /// Exact, case-sensitive ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
}
