//! Sales leads: stored row, create body, partial update body.

use super::Resource;
use crate::error::AppError;
use crate::sanitize::escape_html;
use crate::schema::{TableDef, LEADS};
use crate::service::{explicit_null, NewRow, PatchRow};
use crate::store::Row;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EMPTY_PATCH: &str =
    "Lead request body must contain either 'name', 'phone', 'email', 'city', 'state' or 'pipeline_id'";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub cold_caller: Option<i64>,
    pub assigned_to: Option<i64>,
    pub date_created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub pipeline_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewLead {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pipeline_id: Option<i64>,
}

/// `last_updated` and any other keys in the body are ignored.
/// `pipeline_id: null` takes the lead off its pipeline.
#[derive(Debug, Default, Deserialize)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub pipeline_id: Option<Option<i64>>,
}

impl Resource for Lead {
    type Create = NewLead;
    type Patch = LeadPatch;

    const LABEL: &'static str = "Lead";
    const NOUN: &'static str = "lead";

    fn table() -> &'static TableDef {
        &LEADS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn sanitized(self) -> Self {
        Lead {
            name: escape_html(&self.name),
            phone: escape_html(&self.phone),
            email: escape_html(&self.email),
            ..self
        }
    }

    fn new_row(input: NewLead) -> Result<Row, AppError> {
        Ok(NewRow::new(Self::NOUN)
            .required("name", input.name)?
            .required("phone", input.phone)?
            .required("email", input.email)?
            .required("city", input.city)?
            .required("state", input.state)?
            .optional("pipeline_id", input.pipeline_id)
            .into_row())
    }

    fn patch_row(input: LeadPatch) -> Result<Row, AppError> {
        let escaped = |s: Option<String>| s.map(|s| escape_html(&s));
        let mut row = PatchRow::new()
            .set("name", escaped(input.name))
            .set("phone", escaped(input.phone))
            .set("email", escaped(input.email))
            .set("city", input.city)
            .set("state", input.state)
            .set_nullable("pipeline_id", input.pipeline_id)
            .require_any(EMPTY_PATCH)?;
        row.insert(
            "last_updated".into(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Ok(row)
    }
}
