//! Static table descriptors for the two persisted tables.

/// How a column gets its value when an insert omits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnDefault {
    /// Generated ascending integer key.
    Serial,
    /// Current timestamp.
    Now,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    /// PostgreSQL type for parameter casts (e.g. "timestamptz").
    pub pg_type: &'static str,
    pub default: Option<ColumnDefault>,
}

impl ColumnDef {
    const fn new(name: &'static str, pg_type: &'static str) -> Self {
        ColumnDef {
            name,
            pg_type,
            default: None,
        }
    }

    const fn with_default(name: &'static str, pg_type: &'static str, default: ColumnDefault) -> Self {
        ColumnDef {
            name,
            pg_type,
            default: Some(default),
        }
    }
}

#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

pub static LEADS: TableDef = TableDef {
    name: "leads",
    pk: "id",
    columns: &[
        ColumnDef::with_default("id", "integer", ColumnDefault::Serial),
        ColumnDef::new("name", "text"),
        ColumnDef::new("phone", "text"),
        ColumnDef::new("email", "text"),
        ColumnDef::new("city", "text"),
        ColumnDef::new("state", "text"),
        ColumnDef::new("cold_caller", "integer"),
        ColumnDef::new("assigned_to", "integer"),
        ColumnDef::with_default("date_created", "timestamptz", ColumnDefault::Now),
        ColumnDef::with_default("last_updated", "timestamptz", ColumnDefault::Now),
        ColumnDef::new("pipeline_id", "integer"),
    ],
};

pub static PIPELINES: TableDef = TableDef {
    name: "pipelines",
    pk: "id",
    columns: &[
        ColumnDef::with_default("id", "integer", ColumnDefault::Serial),
        ColumnDef::new("title", "text"),
        ColumnDef::new("team_id", "integer"),
    ],
};
