//! The two HTTP resources and the contract the generic CRUD layer needs from them.

mod lead;
mod pipeline;

pub use lead::{Lead, LeadPatch, NewLead};
pub use pipeline::{NewPipeline, Pipeline, PipelinePatch};

use crate::error::AppError;
use crate::schema::TableDef;
use crate::store::Row;
use serde::{de::DeserializeOwned, Serialize};

pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create request body.
    type Create: DeserializeOwned + Send + 'static;
    /// Partial update request body.
    type Patch: DeserializeOwned + Send + 'static;

    /// Capitalized name used in "not found" messages and logs ("Lead").
    const LABEL: &'static str;
    /// Lower-case name used in validation messages ("lead").
    const NOUN: &'static str;

    fn table() -> &'static TableDef;

    fn id(&self) -> i64;

    /// Outbound form: markup in free-text fields neutralized.
    fn sanitized(self) -> Self;

    /// Validate a create body into insertable column values.
    fn new_row(input: Self::Create) -> Result<Row, AppError>;

    /// Validate a partial update into the columns to set.
    fn patch_row(input: Self::Patch) -> Result<Row, AppError>;

    fn from_row(row: Row) -> Result<Self, AppError> {
        Ok(serde_json::from_value(serde_json::Value::Object(row))?)
    }
}
