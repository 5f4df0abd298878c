//! Route assembly.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::{api_routes, resource_routes};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application: common routes at the root, resources under `config.api_prefix`.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let api = api_routes(state.clone());
    let app = Router::new().merge(common_routes(state));
    let app = if config.api_prefix.is_empty() {
        app.merge(api)
    } else {
        app.nest(&config.api_prefix, api)
    };
    app.layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(middleware::map_response(payload_too_large_envelope))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The body limit layer answers an oversized `Content-Length` with a plain-text 413.
async fn payload_too_large_envelope(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
