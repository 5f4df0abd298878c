//! Resource CRUD handlers: list, create, read, update, delete. Generic over [`Resource`].

use crate::error::AppError;
use crate::extractors::{Existing, JsonBody};
use crate::resources::Resource;
use crate::response::{created, location_for};
use crate::service::ResourceService;
use crate::state::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let rows = ResourceService::list::<R>(state.store.as_ref()).await?;
    Ok(Json(rows.into_iter().map(R::sanitized).collect()))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(input): JsonBody<R::Create>,
) -> Result<Response, AppError> {
    let row = ResourceService::create::<R>(state.store.as_ref(), input).await?;
    let location = location_for(uri.path(), row.id());
    Ok(created(location, row.sanitized()))
}

pub async fn read<R: Resource>(existing: Existing<R>) -> Json<R> {
    Json(existing.record.sanitized())
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    existing: Existing<R>,
    JsonBody(patch): JsonBody<R::Patch>,
) -> Result<impl IntoResponse, AppError> {
    ResourceService::update::<R>(state.store.as_ref(), existing.id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    existing: Existing<R>,
) -> Result<impl IntoResponse, AppError> {
    ResourceService::delete::<R>(state.store.as_ref(), existing.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
