//! Application state management.

use crate::auth::ApiKeyStore;
use crate::config::Config;
use crate::db::{
    CandlestickRepository, DatabasePool, InMemoryCandlestickRepository, PgCandlestickRepository,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across all handlers.
///
/// Immutable after startup; per-request data travels in request extensions.
#[derive(Clone)]
pub struct AppState {
    /// Candlestick storage.
    pub repository: Arc<dyn CandlestickRepository>,
    /// Accepted API keys.
    pub api_keys: Arc<ApiKeyStore>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(repository: Arc<dyn CandlestickRepository>, api_keys: ApiKeyStore) -> Self {
        Self {
            repository,
            api_keys: Arc::new(api_keys),
        }
    }

    /// Creates application state backed by an in-memory repository.
    #[must_use]
    pub fn in_memory(repository: InMemoryCandlestickRepository, api_keys: ApiKeyStore) -> Self {
        Self::new(Arc::new(repository), api_keys)
    }

    /// Creates application state from configuration and an optional database.
    #[must_use]
    pub fn from_config(config: &Config, db: Option<DatabasePool>) -> Self {
        let api_keys = ApiKeyStore::new(&config.api.valid_keys);
        info!("Loaded {} API key(s)", api_keys.len());

        let repository: Arc<dyn CandlestickRepository> = match db {
            Some(db) => Arc::new(PgCandlestickRepository::new(db)),
            None => {
                warn!("No database configured, serving candlesticks from memory");
                Arc::new(InMemoryCandlestickRepository::new())
            }
        };

        Self::new(repository, api_keys)
    }
}
