//! Snapshot reading implementation.

use crate::cli::SnapshotSpec;
use crate::error::{Error, Result};
use crate::input::SnapshotSource;
use crate::model::{Snapshot, Table};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

/// Object form of a snapshot payload: `{ "tables": [ ... ] }`.
#[derive(Deserialize)]
struct WrappedTables {
    tables: Vec<Table>,
}

/// Load the snapshot named by `spec`.
pub fn load_snapshot(spec: &SnapshotSpec) -> Result<Snapshot> {
    let source = SnapshotSource::from_spec(spec)?;

    let snapshot = match source {
        SnapshotSource::Seed => Snapshot::seed(),

        SnapshotSource::File(path) => {
            let text = fs::read_to_string(&path).map_err(|e| Error::IoError {
                path: Some(path.clone()),
                source: e,
            })?;
            parse_snapshot(&text)?
        }

        SnapshotSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::IoError {
                    path: None,
                    source: e,
                })?;
            parse_snapshot(&text)?
        }
    };

    tracing::debug!(tables = snapshot.len(), "snapshot loaded");
    Ok(snapshot)
}

/// Parse a JSON snapshot payload.
pub fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let trimmed = text.trim_start();

    // Empty input
    if trimmed.is_empty() {
        return Err(Error::NoInput);
    }

    // Pick the layout up front so serde_json reports the offending field
    let tables = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Table>>(text)?
    } else {
        serde_json::from_str::<WrappedTables>(text)?.tables
    };
    Ok(Snapshot::from_tables(tables))
}
