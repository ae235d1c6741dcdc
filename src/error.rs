//! Error types for relq.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relq.
///
/// Query diagnostics (missing table, unknown person) are not errors: they travel
/// inside [`crate::query::QueryResult::message`]. These variants cover the
/// surrounding tool only.
#[derive(Error, Debug)]
pub enum Error {
    /// `--data -` was given but nothing was piped to stdin.
    #[error("No input provided. Use: relq --data <file>, or pipe a JSON snapshot with --data -")]
    NoInput,

    /// The specified snapshot file was not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// An I/O error occurred.
    #[error("IO error{}: {source}", path.as_ref().map(|p| format!(" reading {}", p.display())).unwrap_or_default())]
    IoError {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot payload is not valid JSON for a set of tables.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// A command argument was rejected before reaching the engine.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A table named on the command line does not exist.
    #[error("Table not found: '{0}'")]
    TableNotFound(String),

    /// Output formatting error.
    #[error("Format error: {0}")]
    FormatError(String),
}

impl Error {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad snapshot or arguments
            Error::InvalidSnapshot(_) | Error::InvalidInput(_) => 2,
            // I/O errors
            Error::NoInput | Error::FileNotFound(_) | Error::IoError { .. } => 3,
            // Lookup errors
            Error::TableNotFound(_) => 4,
            // Format errors
            Error::FormatError(_) => 5,
        }
    }
}
