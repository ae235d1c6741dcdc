//! Immutable table sets handed to the query engine.

use crate::model::Table;
use std::collections::BTreeMap;

/// A mapping from table name to table.
///
/// Names are case-sensitive. The engine only ever reads a snapshot; edits
/// produce a new one which is swapped in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    tables: BTreeMap<String, Table>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a list of tables. A later table replaces an
    /// earlier one with the same name.
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let mut snapshot = Self::new();
        for table in tables {
            snapshot.insert(table);
        }
        snapshot
    }

    /// Insert a table, returning the one it replaced.
    pub fn insert(&mut self, table: Table) -> Option<Table> {
        let replaced = self.tables.insert(table.name.clone(), table);
        if let Some(old) = &replaced {
            tracing::warn!(table = %old.name, "duplicate table name, keeping the later definition");
        }
        replaced
    }

    /// Look a table up by exact name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Tables in name order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
