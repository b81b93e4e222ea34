//! Database module for candlestick storage.

mod memory;
mod pool;
mod postgres;
mod repository;

pub use memory::InMemoryCandlestickRepository;
pub use pool::DatabasePool;
pub use postgres::PgCandlestickRepository;
pub use repository::{CandlestickRepository, RepositoryError};
