//! Tables and their column metadata.

use crate::model::Person;
use serde::{Deserialize, Serialize};

/// Schema metadata for one column. Only used for listing; queries ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type", alias = "declared_type")]
    pub declared_type: String,
    #[serde(default)]
    pub nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable,
        }
    }
}

/// A named, ordered set of person rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(alias = "data", default)]
    pub rows: Vec<Person>,
    #[serde(alias = "structure", default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Person>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            rows,
            columns,
        }
    }

    /// First row whose name matches `name` case-insensitively.
    pub fn find_person(&self, name: &str) -> Option<&Person> {
        self.rows.iter().find(|p| p.is_named(name))
    }

    /// First row with the given id.
    pub fn find_by_id(&self, id: i64) -> Option<&Person> {
        self.rows.iter().find(|p| p.id == id)
    }
}
