//! In-process datastore with the same defaulting rules as the PostgreSQL tables.
//! Backs the router tests.

use super::{Datastore, Row};
use crate::error::AppError;
use crate::schema::{ColumnDefault, TableDef};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

#[derive(Default)]
struct MemTable {
    rows: BTreeMap<i64, Row>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<&'static str, MemTable>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert rows verbatim (ids included), advancing the id sequence past them.
    pub fn seed(&self, table: &'static TableDef, rows: impl IntoIterator<Item = Row>) -> Result<(), AppError> {
        let mut tables = self.write()?;
        let t = tables.entry(table.name).or_default();
        for row in rows {
            let id = row
                .get(table.pk)
                .and_then(Value::as_i64)
                .ok_or_else(|| AppError::Store(format!("seed row for {} without integer {}", table.name, table.pk)))?;
            t.last_id = t.last_id.max(id);
            t.rows.insert(id, row);
        }
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<&'static str, MemTable>>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<&'static str, MemTable>>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[async_trait]
impl Datastore for MemoryStore {
    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .get(table.name)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn select_by_id(&self, table: &'static TableDef, id: i64) -> Result<Option<Row>, AppError> {
        let tables = self.read()?;
        Ok(tables.get(table.name).and_then(|t| t.rows.get(&id).cloned()))
    }

    async fn insert(&self, table: &'static TableDef, values: &Row) -> Result<Row, AppError> {
        let mut tables = self.write()?;
        let t = tables.entry(table.name).or_default();
        let mut row = Row::new();
        for c in table.columns {
            let v = match (values.get(c.name), c.default) {
                (Some(v), _) => v.clone(),
                (None, Some(ColumnDefault::Serial)) => Value::from(t.last_id + 1),
                (None, Some(ColumnDefault::Now)) => now(),
                (None, None) => Value::Null,
            };
            row.insert(c.name.to_string(), v);
        }
        let id = row
            .get(table.pk)
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Store(format!("{}.{} must be an integer", table.name, table.pk)))?;
        if t.rows.contains_key(&id) {
            return Err(AppError::Store(format!("duplicate key {} in {}", id, table.name)));
        }
        t.last_id = t.last_id.max(id);
        t.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, table: &'static TableDef, id: i64, values: &Row) -> Result<u64, AppError> {
        let mut tables = self.write()?;
        let Some(row) = tables.get_mut(table.name).and_then(|t| t.rows.get_mut(&id)) else {
            return Ok(0);
        };
        for (k, v) in values {
            if k != table.pk && table.column(k).is_some() {
                row.insert(k.clone(), v.clone());
            }
        }
        Ok(1)
    }

    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, AppError> {
        let mut tables = self.write()?;
        let removed = tables
            .get_mut(table.name)
            .and_then(|t| t.rows.remove(&id))
            .is_some();
        Ok(u64::from(removed))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
