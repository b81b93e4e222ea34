//! Route configuration.

use crate::api::middleware::{authenticate_api_key, reject_writes, require_api_user};
use crate::api::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;


/// Creates the candlestick API router, without authentication.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/candlesticks", get(handlers::list_candlesticks))
        .route(
            "/api/candlesticks/search/by-symbol",
            get(handlers::find_candlesticks_by_symbol),
        )
        .route("/api/candlesticks/{id}", get(handlers::get_candlestick))
        .with_state(state)
}

/// Creates the full application: API routes, documentation and the
/// read-only, authentication and authorization layers.
pub fn build_app(state: Arc<AppState>) -> Router {
    create_router(Arc::clone(&state))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // Layers wrap outside-in: the last one added runs first.
        .layer(middleware::from_fn(require_api_user))
        .layer(middleware::from_fn_with_state(state, authenticate_api_key))
        .layer(middleware::from_fn(reject_writes))
}
