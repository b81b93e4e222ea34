//! In-process candlestick repository, used when no database is configured.

use super::repository::{CandlestickRepository, RepositoryError};
use crate::models::{Candlestick, NewCandlestick, Page, PageRequest};
use futures::FutureExt;
use futures::future::{self, BoxFuture};
use parking_lot::RwLock;

/// Candlesticks kept in insertion order behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryCandlestickRepository {
    rows: RwLock<Vec<Candlestick>>,
}

impl InMemoryCandlestickRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given records.
    ///
    /// # Errors
    /// Returns an error if the id space is exhausted.
    pub fn with_candlesticks(
        candles: impl IntoIterator<Item = NewCandlestick>,
    ) -> Result<Self, RepositoryError> {
        let repository = Self::new();
        for candle in candles {
            repository.store(candle)?;
        }
        Ok(repository)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    fn store(&self, candle: NewCandlestick) -> Result<Candlestick, RepositoryError> {
        let mut rows = self.rows.write();
        let id = match rows.last() {
            Some(last) => last.id.checked_add(1).ok_or(RepositoryError::IdExhausted)?,
            None => 1,
        };
        let stored = candle.with_id(id);
        rows.push(stored.clone());
        Ok(stored)
    }

    fn page(&self, request: PageRequest) -> Page<Candlestick> {
        let rows = self.rows.read();
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = rows
            .iter()
            .skip(offset)
            .take(request.size as usize)
            .cloned()
            .collect();

        Page {
            items,
            total: rows.len() as u64,
            request,
        }
    }
}

impl CandlestickRepository for InMemoryCandlestickRepository {
    fn list(
        &self,
        request: PageRequest,
    ) -> BoxFuture<'_, Result<Page<Candlestick>, RepositoryError>> {
        future::ready(Ok(self.page(request))).boxed()
    }

    fn find_by_id(&self, id: i32) -> BoxFuture<'_, Result<Option<Candlestick>, RepositoryError>> {
        let found = self.rows.read().iter().find(|c| c.id == id).cloned();
        future::ready(Ok(found)).boxed()
    }

    fn find_by_symbol<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Candlestick>, RepositoryError>> {
        let matches = self
            .rows
            .read()
            .iter()
            .filter(|c| c.symbol == symbol)
            .cloned()
            .collect();
        future::ready(Ok(matches)).boxed()
    }

    fn insert(
        &self,
        candle: NewCandlestick,
    ) -> BoxFuture<'_, Result<Candlestick, RepositoryError>> {
        future::ready(self.store(candle)).boxed()
    }
}
