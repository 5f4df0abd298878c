//! Request validation: required fields on create, at-least-one field on partial update.

use crate::error::AppError;
use crate::store::Row;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// For `Option<Option<T>>` patch fields paired with `#[serde(default)]`: an absent key stays
/// `None`, an explicit `null` becomes `Some(None)`.
pub fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Collects the values of a new row, failing on the first required field that is absent.
/// Fields are checked in call order.
pub struct NewRow {
    resource: &'static str,
    values: Row,
}

impl NewRow {
    pub fn new(resource: &'static str) -> Self {
        NewRow {
            resource,
            values: Row::new(),
        }
    }

    pub fn required<T: Into<Value>>(mut self, field: &'static str, value: Option<T>) -> Result<Self, AppError> {
        match value {
            Some(v) => {
                self.values.insert(field.to_string(), v.into());
                Ok(self)
            }
            None => {
                let err = AppError::MissingField {
                    resource: self.resource,
                    field,
                };
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Absent optional fields are left out so the column default applies.
    pub fn optional<T: Into<Value>>(mut self, field: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.values.insert(field.to_string(), v.into());
        }
        self
    }

    pub fn into_row(self) -> Row {
        self.values
    }
}

/// Collects the fields a partial update supplies. Only non-null values count as supplied.
#[derive(Default)]
pub struct PatchRow {
    values: Row,
}

impl PatchRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: Into<Value>>(mut self, field: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.values.insert(field.to_string(), v.into());
        }
        self
    }

    /// Like [`set`](Self::set), but an explicit `null` clears the column.
    pub fn set_nullable<T: Into<Value>>(mut self, field: &'static str, value: Option<Option<T>>) -> Self {
        if let Some(v) = value {
            self.values
                .insert(field.to_string(), v.map_or(Value::Null, Into::into));
        }
        self
    }

    /// Fail with `message` when no non-null field was supplied.
    pub fn require_any(self, message: &str) -> Result<Row, AppError> {
        if self.values.values().all(Value::is_null) {
            tracing::error!("{}", message);
            return Err(AppError::Validation(message.to_string()));
        }
        Ok(self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_missing_required_field_is_reported() {
        let err = NewRow::new("lead")
            .required("name", Some("A"))
            .and_then(|r| r.required("phone", None::<String>))
            .and_then(|r| r.required("email", None::<String>))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Missing 'phone' in lead request body");
    }

    #[test]
    fn absent_optional_field_is_omitted() {
        let row = NewRow::new("lead")
            .required("name", Some("A"))
            .unwrap()
            .optional("pipeline_id", None::<i64>)
            .into_row();
        assert_eq!(Value::Object(row), json!({ "name": "A" }));
    }

    #[test]
    fn empty_patch_is_rejected() {
        let err = PatchRow::new()
            .set("title", None::<String>)
            .require_any("Request body must contain either 'title' or 'team_id'")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_counts_as_a_supplied_value() {
        let row = PatchRow::new()
            .set("title", None::<String>)
            .set("team_id", Some(0i64))
            .require_any("unused")
            .unwrap();
        assert_eq!(Value::Object(row), json!({ "team_id": 0 }));
    }

    #[test]
    fn explicit_null_is_written_but_not_counted() {
        let row = PatchRow::new()
            .set("name", Some("X"))
            .set_nullable("pipeline_id", Some(None::<i64>))
            .require_any("unused")
            .unwrap();
        assert_eq!(Value::Object(row), json!({ "name": "X", "pipeline_id": null }));

        let err = PatchRow::new()
            .set_nullable("pipeline_id", Some(None::<i64>))
            .require_any("nothing to update")
            .unwrap_err();
        assert_eq!(err.to_string(), "nothing to update");
    }
}
