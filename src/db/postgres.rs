//! PostgreSQL-backed candlestick repository.

use super::pool::DatabasePool;
use super::repository::{CandlestickRepository, RepositoryError};
use crate::models::{Candlestick, NewCandlestick, Page, PageRequest};
use futures::FutureExt;
use futures::future::BoxFuture;

#[cfg(all(test, feature = "postgres-tests"))]
mod tests;

/// Candlestick repository over the `candlestick` table.
#[derive(Clone)]
pub struct PgCandlestickRepository {
    db: DatabasePool,
}

impl PgCandlestickRepository {
    /// Creates a repository using the given pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

impl CandlestickRepository for PgCandlestickRepository {
    fn list(
        &self,
        request: PageRequest,
    ) -> BoxFuture<'_, Result<Page<Candlestick>, RepositoryError>> {
        async move {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candlestick")
                .fetch_one(self.db.pool())
                .await?;

            let items = sqlx::query_as::<_, Candlestick>(
                r#"
                SELECT id, open, close, high, low, volume, timestamp, symbol
                FROM candlestick
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(i64::from(request.size))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(self.db.pool())
            .await?;

            Ok(Page {
                items,
                total: u64::try_from(total).unwrap_or_default(),
                request,
            })
        }
        .boxed()
    }

    fn find_by_id(&self, id: i32) -> BoxFuture<'_, Result<Option<Candlestick>, RepositoryError>> {
        async move {
            let row = sqlx::query_as::<_, Candlestick>(
                r#"
                SELECT id, open, close, high, low, volume, timestamp, symbol
                FROM candlestick
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
            Ok(row)
        }
        .boxed()
    }

    fn find_by_symbol<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Candlestick>, RepositoryError>> {
        async move {
            let rows = sqlx::query_as::<_, Candlestick>(
                r#"
                SELECT id, open, close, high, low, volume, timestamp, symbol
                FROM candlestick
                WHERE symbol = $1
                ORDER BY id
                "#,
            )
            .bind(symbol)
            .fetch_all(self.db.pool())
            .await?;
            Ok(rows)
        }
        .boxed()
    }

    fn insert(
        &self,
        candle: NewCandlestick,
    ) -> BoxFuture<'_, Result<Candlestick, RepositoryError>> {
        async move {
            let stored = sqlx::query_as::<_, Candlestick>(
                r#"
                INSERT INTO candlestick (open, close, high, low, volume, timestamp, symbol)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, open, close, high, low, volume, timestamp, symbol
                "#,
            )
            .bind(candle.open)
            .bind(candle.close)
            .bind(candle.high)
            .bind(candle.low)
            .bind(candle.volume)
            .bind(candle.timestamp)
            .bind(&candle.symbol)
            .fetch_one(self.db.pool())
            .await?;
            Ok(stored)
        }
        .boxed()
    }
}
