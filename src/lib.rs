//! relq - Relationship Query Tool.
//!
//! Answers four canned questions over a small set of people tables:
//!
//! - **friends**: everyone sharing a person's friend circle
//! - **friend-of-friend**: circle-mates of a person's circle-mates, across tables
//! - **interests**: people whose hobby matches, ranked by followers
//! - **you-may-like**: people sharing a friend's hobby, ranked by followers
//!
//! Tables come from the built-in seed data or a JSON snapshot. The
//! [`query::QueryEngine`] holds the current snapshot and can be refreshed
//! while queries run.

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod query;

pub use cli::Args;
pub use error::{Error, Result};

use analytics::Analytics;
use cli::Command;
use format::{Output, format_output};
use input::load_snapshot;
use query::QueryEngine;

/// Run relq with the given arguments.
pub fn run(args: &Args) -> Result<()> {
    // Validate arguments before touching any input
    let query = args.command.to_query()?;

    let snapshot = load_snapshot(&args.snapshot_spec())?;
    let engine = QueryEngine::new(snapshot);

    let output = match (&args.command, query) {
        (_, Some(query)) => Output::Rows {
            title: Some(query.kind().label().to_string()),
            result: engine.execute(&query),
        },
        (Command::Tables, None) => Output::Rows {
            title: Some("Tables".to_string()),
            result: catalog::list_tables(&engine.snapshot()),
        },
        (Command::Show { table }, None) => Output::Rows {
            title: Some(table.clone()),
            result: catalog::show_table(&engine.snapshot(), table)?,
        },
        (_, None) => Output::Stats(Analytics::compute(&engine.snapshot())),
    };

    // Raw output carries rows only; report diagnostics separately
    if args.raw {
        if let Output::Rows { result, .. } = &output {
            if let Some(message) = &result.message {
                eprintln!("{}", message);
            }
        }
    }

    let rendered = format_output(&output, args)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}
