//! Not-found guard for id-scoped routes: resolves `/:id` to a stored row before the handler runs.

use crate::error::AppError;
use crate::resources::Resource;
use crate::service::ResourceService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The row named by the `:id` path segment. Rejects with the resource's 404
/// when the segment is not an integer or no row matches.
#[derive(Debug)]
pub struct Existing<R> {
    pub id: i64,
    pub record: R,
}

#[async_trait]
impl<R: Resource> FromRequestParts<AppState> for Existing<R> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound(R::LABEL))?;
        let Ok(id) = raw.parse::<i64>() else {
            tracing::error!("{} with id {} not found.", R::LABEL, raw);
            return Err(AppError::NotFound(R::LABEL));
        };
        match ResourceService::find::<R>(state.store.as_ref(), id).await? {
            Some(record) => Ok(Existing { id, record }),
            None => {
                tracing::error!("{} with id {} not found.", R::LABEL, id);
                Err(AppError::NotFound(R::LABEL))
            }
        }
    }
}
