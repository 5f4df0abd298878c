//! Sales pipelines: stored row, create body, partial update body.

use super::Resource;
use crate::error::AppError;
use crate::sanitize::escape_html;
use crate::schema::{TableDef, PIPELINES};
use crate::service::{NewRow, PatchRow};
use crate::store::Row;
use serde::{Deserialize, Serialize};

const EMPTY_PATCH: &str = "Request body must contain either 'title' or 'team_id'";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: i64,
    pub title: String,
    pub team_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewPipeline {
    pub title: Option<String>,
    pub team_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PipelinePatch {
    pub title: Option<String>,
    pub team_id: Option<i64>,
}

impl Resource for Pipeline {
    type Create = NewPipeline;
    type Patch = PipelinePatch;

    const LABEL: &'static str = "Pipeline";
    const NOUN: &'static str = "pipeline";

    fn table() -> &'static TableDef {
        &PIPELINES
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn sanitized(self) -> Self {
        Pipeline {
            title: escape_html(&self.title),
            ..self
        }
    }

    fn new_row(input: NewPipeline) -> Result<Row, AppError> {
        Ok(NewRow::new(Self::NOUN)
            .required("title", input.title)?
            .required("team_id", input.team_id)?
            .into_row())
    }

    fn patch_row(input: PipelinePatch) -> Result<Row, AppError> {
        PatchRow::new()
            .set("title", input.title.map(|s| escape_html(&s)))
            .set("team_id", input.team_id)
            .require_any(EMPTY_PATCH)
    }
}
