//! Snapshot source detection.

use crate::cli::SnapshotSpec;
use crate::error::{Error, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Resolved snapshot source ready for reading.
#[derive(Debug)]
pub enum SnapshotSource {
    /// Built-in seed tables.
    Seed,
    /// Read JSON from a file path.
    File(PathBuf),
    /// Read JSON from stdin.
    Stdin,
}

impl SnapshotSource {
    /// Create a SnapshotSource from a SnapshotSpec.
    pub fn from_spec(spec: &SnapshotSpec) -> Result<Self> {
        match spec {
            SnapshotSpec::Seed => Ok(SnapshotSource::Seed),

            SnapshotSpec::Stdin => {
                // Nothing piped in
                if std::io::stdin().is_terminal() {
                    return Err(Error::NoInput);
                }
                Ok(SnapshotSource::Stdin)
            }

            SnapshotSpec::File(path) => {
                if !path.exists() {
                    return Err(Error::FileNotFound(path.clone()));
                }
                Ok(SnapshotSource::File(path.clone()))
            }
        }
    }
}
