//! Generic CRUD over any [`Resource`] against an injected [`Datastore`].

use crate::error::AppError;
use crate::resources::Resource;
use crate::store::Datastore;

pub struct ResourceService;

impl ResourceService {
    /// Every row, as stored (not yet sanitized).
    pub async fn list<R: Resource>(store: &dyn Datastore) -> Result<Vec<R>, AppError> {
        store
            .select_all(R::table())
            .await?
            .into_iter()
            .map(R::from_row)
            .collect()
    }

    pub async fn find<R: Resource>(store: &dyn Datastore, id: i64) -> Result<Option<R>, AppError> {
        store
            .select_by_id(R::table(), id)
            .await?
            .map(R::from_row)
            .transpose()
    }

    /// Validate and insert. Returns the stored row.
    pub async fn create<R: Resource>(store: &dyn Datastore, input: R::Create) -> Result<R, AppError> {
        let values = R::new_row(input)?;
        let row = store.insert(R::table(), &values).await?;
        let created = R::from_row(row)?;
        tracing::info!(id = created.id(), "{} with id {} created", R::LABEL, created.id());
        Ok(created)
    }

    /// Validate and apply a partial update. `NotFound` when no row was touched.
    pub async fn update<R: Resource>(store: &dyn Datastore, id: i64, patch: R::Patch) -> Result<u64, AppError> {
        let values = R::patch_row(patch)?;
        let affected = store.update(R::table(), id, &values).await?;
        if affected == 0 {
            tracing::warn!(id, "{} with id {} vanished before update", R::LABEL, id);
            return Err(AppError::NotFound(R::LABEL));
        }
        tracing::info!(id, "{} with id {} updated", R::LABEL, id);
        Ok(affected)
    }

    /// `NotFound` when no row was removed.
    pub async fn delete<R: Resource>(store: &dyn Datastore, id: i64) -> Result<u64, AppError> {
        let affected = store.delete(R::table(), id).await?;
        if affected == 0 {
            tracing::warn!(id, "{} with id {} vanished before delete", R::LABEL, id);
            return Err(AppError::NotFound(R::LABEL));
        }
        tracing::info!(id, "{} with id {} deleted", R::LABEL, id);
        Ok(affected)
    }
}
