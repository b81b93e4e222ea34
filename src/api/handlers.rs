//! Candlestick request handlers.

use crate::auth::ApiKeyPrincipal;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    Candlestick, CandlestickListResponse, CandlestickPageResponse, PageQuery, PageRequest,
    SymbolQuery,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use tracing::debug;


/// List candlesticks, one page at a time, in insertion order.
#[utoipa::path(
    get,
    path = "/api/candlesticks",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of candlesticks", body = CandlestickPageResponse),
        (status = 400, description = "Malformed paging parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    tag = "Candlesticks"
)]
pub async fn list_candlesticks(
    State(state): State<Arc<AppState>>,
    principal: ApiKeyPrincipal,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CandlestickPageResponse>, ApiError> {
    let Query(query) = query?;
    let request = PageRequest::from(query);
    debug!(
        principal = %principal.name(),
        page = request.number,
        size = request.size,
        "Listing candlesticks"
    );

    let page = state.repository.list(request).await?;
    Ok(Json(CandlestickPageResponse::from(page)))
}

/// Get a single candlestick by id.
#[utoipa::path(
    get,
    path = "/api/candlesticks/{id}",
    params(
        ("id" = i32, Path, description = "Candlestick id")
    ),
    responses(
        (status = 200, description = "Candlestick", body = Candlestick),
        (status = 400, description = "Id is not a 32-bit integer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Candlestick not found", body = ErrorResponse)
    ),
    tag = "Candlesticks"
)]
pub async fn get_candlestick(
    State(state): State<Arc<AppState>>,
    principal: ApiKeyPrincipal,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Candlestick>, ApiError> {
    let Path(id) = id?;
    debug!(principal = %principal.name(), id, "Fetching candlestick");

    match state.repository.find_by_id(id).await? {
        Some(candle) => Ok(Json(candle)),
        None => Err(ApiError::NotFound(format!("Candlestick {}", id))),
    }
}

/// Find every candlestick with the given symbol.
///
/// The match is exact and case-sensitive. Unknown symbols yield an empty list.
#[utoipa::path(
    get,
    path = "/api/candlesticks/search/by-symbol",
    params(SymbolQuery),
    responses(
        (status = 200, description = "Matching candlesticks", body = CandlestickListResponse),
        (status = 400, description = "Missing symbol parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    tag = "Candlesticks"
)]
pub async fn find_candlesticks_by_symbol(
    State(state): State<Arc<AppState>>,
    principal: ApiKeyPrincipal,
    query: Result<Query<SymbolQuery>, QueryRejection>,
) -> Result<Json<CandlestickListResponse>, ApiError> {
    let Query(query) = query?;
    let symbol = query
        .symbol
        .ok_or_else(|| ApiError::InvalidRequest("missing query parameter: symbol".to_string()))?;
    debug!(principal = %principal.name(), %symbol, "Searching candlesticks by symbol");

    let candlesticks = state.repository.find_by_symbol(&symbol).await?;
    Ok(Json(CandlestickListResponse { candlesticks }))
}
