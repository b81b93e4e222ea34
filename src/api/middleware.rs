//! Request pipeline: read-only policy, API key authentication and
//! authorization.
//!
//! Layers run in this order for every request:
//!
//! 1. [`reject_writes`] answers write verbs on the candlestick collection
//!    with 405 before anything else looks at the request.
//! 2. [`authenticate_api_key`] checks `X-API-Key` and, on a match, stores an
//!    [`ApiKeyPrincipal`] in the request's extensions. It never responds.
//! 3. [`require_api_user`] turns a missing principal into 401 for every path
//!    outside the documentation allow-list.

use crate::auth::{API_KEY_HEADER, ApiKeyPrincipal, Role, is_public_path};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{Method, Request, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Root of the read-only candlestick collection.
pub const CANDLESTICKS_PATH: &str = "/api/candlesticks";

/// Whether `method` would modify a resource.
fn is_write_method(method: &Method) -> bool {
    [Method::POST, Method::PUT, Method::PATCH, Method::DELETE].contains(method)
}

/// Whether `path` is the candlestick collection or anything below it.
fn is_candlestick_path(path: &str) -> bool {
    path == CANDLESTICKS_PATH
        || path
            .strip_prefix(CANDLESTICKS_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Rejects POST, PUT, PATCH and DELETE on `/api/candlesticks/**` with 405,
/// whatever the authentication state or payload.
pub async fn reject_writes(request: Request<Body>, next: Next) -> Response {
    if is_write_method(request.method()) && is_candlestick_path(request.uri().path()) {
        return ApiError::MethodNotAllowed(format!(
            "{} {}",
            request.method(),
            request.uri().path()
        ))
        .into_response();
    }

    next.run(request).await
}

/// Validates the `X-API-Key` header and marks the request as authenticated.
///
/// Missing or unknown keys leave the request unmarked; the decision to
/// reject is left to [`require_api_user`].
pub async fn authenticate_api_key(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if is_public_path(request.uri().path()) {
        return next.run(request).await;
    }

    // Non-UTF-8 header values count as invalid keys.
    let outcome = request.headers().get(API_KEY_HEADER).map(|value| {
        value
            .to_str()
            .ok()
            .and_then(|key| state.api_keys.authenticate(key))
    });

    match outcome {
        Some(Some(principal)) => {
            info!(
                method = %request.method(),
                path = %request.uri().path(),
                principal = %principal.name(),
                "API key authenticated"
            );
            request.extensions_mut().insert(principal);
        }
        Some(None) => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Invalid API key attempted"
            );
        }
        None => {}
    }

    next.run(request).await
}

/// Requires an authenticated [`ApiKeyPrincipal`] on every non-public path.
pub async fn require_api_user(request: Request<Body>, next: Next) -> Response {
    if is_public_path(request.uri().path()) {
        return next.run(request).await;
    }

    let authorized = request
        .extensions()
        .get::<ApiKeyPrincipal>()
        .is_some_and(|principal| principal.has_role(Role::ApiUser));

    if !authorized {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request without a valid API key"
        );
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}

impl<S> FromRequestParts<S> for ApiKeyPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyPrincipal>()
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }
}
