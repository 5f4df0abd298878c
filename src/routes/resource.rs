//! Resource routers: one collection router per resource, mounted under the API prefix behind the token check.

use crate::auth::require_bearer_token;
use crate::handlers::resource::{create, delete, list, read, update};
use crate::resources::{Lead, Pipeline, Resource};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// `/` (list, create) and `/:id` (read, update, delete) for one resource.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(read::<R>).patch(update::<R>).delete(delete::<R>))
}

/// `/leads` and `/pipelines`, each requiring the bearer token.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/leads", resource_routes::<Lead>())
        .nest("/pipelines", resource_routes::<Pipeline>())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token))
        .with_state(state)
}
