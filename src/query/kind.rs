//! The fixed query shapes and their names.

use crate::model::STUDENTS_PRIMARY;
use std::fmt;

/// Which canned query to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Friends,
    FriendOfFriend,
    Interests,
    YouMayLike,
}

impl QueryKind {
    /// Canonical command name.
    pub fn name(self) -> &'static str {
        match self {
            QueryKind::Friends => "friends",
            QueryKind::FriendOfFriend => "friend-of-friend",
            QueryKind::Interests => "interests",
            QueryKind::YouMayLike => "you-may-like",
        }
    }

    /// Human-readable title.
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Friends => "Person's Friends",
            QueryKind::FriendOfFriend => "Friend of a Friend",
            QueryKind::Interests => "Interest-based Suggestions",
            QueryKind::YouMayLike => "You May Like",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully-parameterised query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Friends { person: String, table: String },
    FriendOfFriend { person: String },
    Interests { interest: String },
    YouMayLike { person: String },
}

impl Query {
    /// Friends query against the default primary table.
    pub fn friends(person: impl Into<String>) -> Self {
        Query::Friends {
            person: person.into(),
            table: STUDENTS_PRIMARY.to_string(),
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Friends { .. } => QueryKind::Friends,
            Query::FriendOfFriend { .. } => QueryKind::FriendOfFriend,
            Query::Interests { .. } => QueryKind::Interests,
            Query::YouMayLike { .. } => QueryKind::YouMayLike,
        }
    }

    /// The free-text argument (person name or interest).
    pub fn subject(&self) -> &str {
        match self {
            Query::Friends { person, .. }
            | Query::FriendOfFriend { person }
            | Query::YouMayLike { person } => person,
            Query::Interests { interest } => interest,
        }
    }
}
