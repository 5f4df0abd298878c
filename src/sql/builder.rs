//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a table descriptor.

use crate::schema::{ColumnDef, TableDef};
use serde_json::{Map, Value};

/// Quote identifier for PostgreSQL (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }

    /// Placeholder with a cast so untyped text and null parameters bind to the column type.
    fn placeholder(&mut self, column: &ColumnDef, v: Value) -> String {
        let n = self.push_param(v);
        format!("${}::{}", n, column.pg_type)
    }
}

fn column_list(table: &TableDef) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by primary key.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted(table.pk)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(Value::from(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(table),
        quoted(table.name),
        quoted(table.pk),
        ph
    );
    q
}

/// INSERT the given values and return the full row.
/// Columns absent from `values` are omitted so the database default (or NULL) applies;
/// keys that are not columns of the table are ignored.
pub fn insert(table: &TableDef, values: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in table.columns {
        let Some(v) = values.get(c.name) else { continue };
        placeholders.push(q.placeholder(c, v.clone()));
        cols.push(quoted(c.name));
    }
    let target = if cols.is_empty() {
        format!("{} DEFAULT VALUES", quoted(table.name))
    } else {
        format!(
            "{} ({}) VALUES ({})",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", ")
        )
    };
    q.sql = format!("INSERT INTO {} RETURNING {}", target, column_list(table));
    q
}

/// UPDATE by id: SET only the given values that name non-key columns.
/// Returns None when nothing would be set.
pub fn update(table: &TableDef, id: i64, values: &Map<String, Value>) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for c in table.columns {
        if c.name == table.pk {
            continue;
        }
        let Some(v) = values.get(c.name) else { continue };
        let rhs = q.placeholder(c, v.clone());
        sets.push(format!("{} = {}", quoted(c.name), rhs));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(Value::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        id_param
    );
    Some(q)
}

/// DELETE by id.
pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(Value::from(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(table.name),
        quoted(table.pk),
        ph
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{LEADS, PIPELINES};
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn select_all_orders_by_key() {
        let q = select_all(&PIPELINES);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "title", "team_id" FROM "pipelines" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_by_id_binds_the_id() {
        let q = select_by_id(&PIPELINES, 7);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "title", "team_id" FROM "pipelines" WHERE "id" = $1"#
        );
        assert_eq!(q.params, vec![json!(7)]);
    }

    #[test]
    fn insert_follows_column_order_and_skips_unknown_keys() {
        let values = map(json!({ "team_id": 3, "title": "Q3", "bogus": true }));
        let q = insert(&PIPELINES, &values);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "pipelines" ("title", "team_id") VALUES ($1::text, $2::integer) RETURNING "id", "title", "team_id""#
        );
        assert_eq!(q.params, vec![json!("Q3"), json!(3)]);
    }

    #[test]
    fn insert_leaves_defaulted_lead_columns_to_the_database() {
        let values = map(json!({
            "name": "A", "phone": "1", "email": "a@b.com", "city": "C", "state": "S"
        }));
        let q = insert(&LEADS, &values);
        assert!(q.sql.starts_with(
            r#"INSERT INTO "leads" ("name", "phone", "email", "city", "state") VALUES ($1::text, $2::text, $3::text, $4::text, $5::text) RETURNING "id", "name""#
        ));
        assert!(!q.sql.contains("DEFAULT VALUES"));
    }

    #[test]
    fn update_sets_only_given_columns_and_never_the_key() {
        let values = map(json!({ "id": 99, "team_id": 0 }));
        let q = update(&PIPELINES, 2, &values).unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "pipelines" SET "team_id" = $1::integer WHERE "id" = $2"#
        );
        assert_eq!(q.params, vec![json!(0), json!(2)]);
    }

    #[test]
    fn update_with_nothing_to_set_is_none() {
        assert!(update(&PIPELINES, 2, &map(json!({ "id": 5 }))).is_none());
    }

    #[test]
    fn delete_by_key() {
        let q = delete(&LEADS, 4);
        assert_eq!(q.sql, r#"DELETE FROM "leads" WHERE "id" = $1"#);
        assert_eq!(q.params, vec![json!(4)]);
    }
}
