//! PostgreSQL datastore using the safe SQL builder.

use super::{Datastore, Row};
use crate::error::AppError;
use crate::schema::TableDef;
use crate::sql::{self, PgBindValue, QueryBuf};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgRow};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    fn prepare(q: &QueryBuf) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        q.params
            .iter()
            .fold(sqlx::query(&q.sql), |query, p| PgBindValue::from_json(p).bind_to(query))
    }

    async fn query_many(&self, q: &QueryBuf) -> Result<Vec<Row>, AppError> {
        let rows = Self::prepare(q).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn query_optional(&self, q: &QueryBuf) -> Result<Option<Row>, AppError> {
        let row = Self::prepare(q).fetch_optional(&self.pool).await?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        let result = Self::prepare(q).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Datastore for PgStore {
    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError> {
        self.query_many(&sql::select_all(table)).await
    }

    async fn select_by_id(&self, table: &'static TableDef, id: i64) -> Result<Option<Row>, AppError> {
        self.query_optional(&sql::select_by_id(table, id)).await
    }

    async fn insert(&self, table: &'static TableDef, values: &Row) -> Result<Row, AppError> {
        self.query_optional(&sql::insert(table, values))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn update(&self, table: &'static TableDef, id: i64, values: &Row) -> Result<u64, AppError> {
        match sql::update(table, id, values) {
            Some(q) => self.execute(&q).await,
            None => Ok(0),
        }
    }

    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, AppError> {
        self.execute(&sql::delete(table, id)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn row_to_json(row: &PgRow) -> Row {
    use sqlx::{Column, Row as _};
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    map
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    use sqlx::Row as _;
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339_opts(chrono::SecondsFormat::Millis, true));
    }
    // `timestamp without time zone` columns are stored as UTC.
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.and_utc().to_rfc3339_opts(chrono::SecondsFormat::Millis, true));
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    Value::Null
}
