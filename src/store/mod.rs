//! The datastore capability handlers depend on: select / insert / update / delete against a named table.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::schema::TableDef;
use async_trait::async_trait;

/// One row as column name -> JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[async_trait]
pub trait Datastore: Send + Sync {
    /// All rows ordered by primary key.
    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError>;

    async fn select_by_id(&self, table: &'static TableDef, id: i64) -> Result<Option<Row>, AppError>;

    /// Insert and return the stored row, defaults applied.
    async fn insert(&self, table: &'static TableDef, values: &Row) -> Result<Row, AppError>;

    /// Set the given columns on the row keyed by `id`. Returns rows affected.
    async fn update(&self, table: &'static TableDef, id: i64, values: &Row) -> Result<u64, AppError>;

    /// Returns rows affected.
    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, AppError>;

    /// Liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
