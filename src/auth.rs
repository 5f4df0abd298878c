//! Bearer-token check in front of the resource routes.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Reject with 401 unless `Authorization: Bearer <token>` matches the configured API token.
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(state.clone(), require_bearer_token))
/// ```
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|t| t.trim() == &*state.api_token);

    if !authorized {
        tracing::error!(path = %request.uri().path(), "Unauthorized request");
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}
