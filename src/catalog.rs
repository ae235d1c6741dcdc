//! Table listings for display.

use crate::error::{Error, Result};
use crate::model::{Column, Snapshot};
use crate::query::{QueryResult, group_thousands};

/// One row per table: name, row count and declared columns.
pub fn list_tables(snapshot: &Snapshot) -> QueryResult {
    let rows = snapshot
        .tables()
        .map(|table| {
            vec![
                table.name.clone(),
                table.rows.len().to_string(),
                describe_columns(&table.columns),
            ]
        })
        .collect();
    QueryResult::new(&["TABLE", "ROWS", "COLUMNS"], rows)
}

/// Every row of `name` in stored order.
pub fn show_table(snapshot: &Snapshot, name: &str) -> Result<QueryResult> {
    let table = snapshot
        .table(name)
        .ok_or_else(|| Error::TableNotFound(name.to_string()))?;
    let rows = table
        .rows
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.friend_id.to_string(),
                p.hobby.clone(),
                group_thousands(p.followers),
            ]
        })
        .collect();
    Ok(QueryResult::new(&["ID", "NAME", "FRND_ID", "HOB", "FOLL"], rows))
}

fn describe_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| {
            if c.nullable {
                format!("{} {}", c.name, c.declared_type)
            } else {
                format!("{} {} NOT NULL", c.name, c.declared_type)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
