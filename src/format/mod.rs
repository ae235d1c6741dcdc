//! Output formatting module.

mod json;
mod pretty;
mod raw;

use crate::analytics::Analytics;
use crate::cli::Args;
use crate::error::Result;
use crate::query::QueryResult;

pub use json::format_json;
pub use pretty::format_pretty;
pub use raw::format_raw;

/// Something a command produced for display.
#[derive(Debug, Clone)]
pub enum Output {
    /// Tabular rows, with an optional heading.
    Rows {
        title: Option<String>,
        result: QueryResult,
    },
    /// Snapshot summary.
    Stats(Analytics),
}

/// Format an output according to the output flags.
pub fn format_output(output: &Output, args: &Args) -> Result<String> {
    if args.json {
        format_json(output)
    } else if args.raw {
        format_raw(output)
    } else {
        format_pretty(output, args)
    }
}
