//! Storage abstraction for candlesticks.

use crate::models::{Candlestick, NewCandlestick, Page, PageRequest};
use futures::future::BoxFuture;
use thiserror::Error;

/// Repository error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database rejected or failed the query.
    #[error("query failed: {0}")]
    Database(#[from] sqlx::Error),
    /// No further primary keys can be generated.
    #[error("candlestick id space exhausted")]
    IdExhausted,
}

/// Read access to the candlestick collection, plus the insert path used by
/// out-of-band ingestion. Nothing in the HTTP layer calls [`insert`].
///
/// [`insert`]: CandlestickRepository::insert
pub trait CandlestickRepository: Send + Sync {
    /// Returns one page of candlesticks in insertion (id) order.
    fn list(&self, request: PageRequest)
    -> BoxFuture<'_, Result<Page<Candlestick>, RepositoryError>>;

    /// Looks up a candlestick by primary key.
    fn find_by_id(&self, id: i32) -> BoxFuture<'_, Result<Option<Candlestick>, RepositoryError>>;

    /// Returns every candlestick whose symbol equals `symbol` exactly.
    fn find_by_symbol<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Candlestick>, RepositoryError>>;

    /// Stores a candlestick and returns it with its generated id.
    fn insert(&self, candle: NewCandlestick)
    -> BoxFuture<'_, Result<Candlestick, RepositoryError>>;
}
