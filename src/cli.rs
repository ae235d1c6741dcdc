//! CLI argument parsing for relq.

use crate::error::{Error, Result};
use crate::model::STUDENTS_PRIMARY;
use crate::query::Query;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relationship Query Tool.
///
/// Run canned friend, interest and suggestion queries over a small set of
/// people tables (two student tables and a celebrity table).
#[derive(Parser, Debug)]
#[command(
    name = "relq",
    version,
    about = "Relationship Query Tool for people tables",
    after_help = r#"EXAMPLES:
    relq friends vivek                 Friend circle of vivek in stdnts1
    relq friends vivek -t stdnts2      Same, in another table
    relq fof vivek                     Friends of vivek's friends
    relq interests dance               Dance fans, most followed first
    relq yml pranava                   Suggestions from pranava's friend's hobby
    relq tables                        List tables
    relq show celebrities              Dump a table
    relq stats                         Follower and interest summary
    relq --data tables.json stats      Use tables from a JSON file
    cat tables.json | relq -d - tables Read tables from stdin

TABLES:
    stdnts1      primary students (friends, friend-of-friend)
    stdnts2      secondary students (friend-of-friend, interests, you-may-like)
    celebrities  (interests, you-may-like)"#
)]
pub struct Args {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,

    /// JSON snapshot file, or `-` for stdin. Defaults to the built-in seed tables.
    #[arg(long, short = 'd', global = true, env = "RELQ_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON.
    #[arg(long, short = 'j', global = true, conflicts_with = "raw")]
    pub json: bool,

    /// Output tab-separated rows without headers.
    #[arg(long, short = 'r', global = true)]
    pub raw: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Everyone sharing a person's friend circle.
    #[command(name = "friends")]
    Friends {
        /// Person to look up (case-insensitive).
        name: String,

        /// Table to search.
        #[arg(long, short = 't', default_value = STUDENTS_PRIMARY)]
        table: String,
    },

    /// Friends of a person's friends (stdnts1 then stdnts2).
    #[command(name = "friend-of-friend", visible_alias = "fof")]
    FriendOfFriend {
        /// Person to look up in stdnts1 (case-insensitive).
        name: String,
    },

    /// People whose hobby contains an interest, most followed first.
    #[command(name = "interests")]
    Interests {
        /// Interest to search for (case-insensitive substring).
        interest: String,
    },

    /// People sharing the hobby of a person's friend, most followed first.
    #[command(name = "you-may-like", visible_alias = "yml")]
    YouMayLike {
        /// Person to look up in stdnts2 (case-insensitive).
        name: String,
    },

    /// List tables with row counts and columns.
    #[command(name = "tables")]
    Tables,

    /// Print every row of a table.
    #[command(name = "show")]
    Show {
        /// Table name (case-sensitive).
        table: String,
    },

    /// Follower and interest summary.
    #[command(name = "stats")]
    Stats,
}

/// Specifies where the snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSpec {
    /// Built-in seed tables.
    Seed,
    /// Read JSON from stdin.
    Stdin,
    /// Read JSON from a file path.
    File(PathBuf),
}

impl Args {
    /// Resolve the snapshot source from `--data`.
    pub fn snapshot_spec(&self) -> SnapshotSpec {
        match &self.data {
            None => SnapshotSpec::Seed,
            Some(path) if path.as_os_str() == "-" => SnapshotSpec::Stdin,
            Some(path) => SnapshotSpec::File(path.clone()),
        }
    }
}

impl Command {
    /// The engine query behind this command, if it is one.
    ///
    /// Blank names and interests are rejected here; the engine would
    /// otherwise take them literally.
    pub fn to_query(&self) -> Result<Option<Query>> {
        let query = match self {
            Command::Friends { name, table } => Query::Friends {
                person: non_blank("name", name)?,
                table: table.clone(),
            },
            Command::FriendOfFriend { name } => Query::FriendOfFriend {
                person: non_blank("name", name)?,
            },
            Command::Interests { interest } => Query::Interests {
                interest: non_blank("interest", interest)?,
            },
            Command::YouMayLike { name } => Query::YouMayLike {
                person: non_blank("name", name)?,
            },
            Command::Tables | Command::Show { .. } | Command::Stats => return Ok(None),
        };
        Ok(Some(query))
    }
}

fn non_blank(what: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{what} must not be blank")));
    }
    Ok(value.to_string())
}
