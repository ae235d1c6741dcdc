//! Uniform tabular query output.

use serde::Serialize;
use thiserror::Error;

/// Why a query produced no rows.
///
/// These never abort a query; their text becomes [`QueryResult::message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryIssue {
    /// A required table is absent from the snapshot.
    #[error("Table {0} not found")]
    TableNotFound(String),

    /// The subject could not be located by name.
    #[error("Person {0} not found")]
    PersonNotFound(String),

    /// The subject's `friend_id` points at no row.
    #[error("Friend not found for {0}")]
    FriendNotFound(String),
}

/// Result of a query execution.
///
/// An empty `rows` with a `message` is a diagnosed miss; an empty `rows`
/// without one is a valid empty answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryResult {
    pub fn new(columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            message: None,
        }
    }

    /// An empty result explaining what was missing.
    pub fn missing(columns: &[&str], issue: QueryIssue) -> Self {
        Self {
            message: Some(issue.to_string()),
            ..Self::new(columns, Vec::new())
        }
    }

    /// Settle a query outcome. A missing table yields no headers at all; any
    /// other miss keeps the query's normal headers.
    pub fn from_outcome(columns: &[&str], outcome: Result<Vec<Vec<String>>, QueryIssue>) -> Self {
        match outcome {
            Ok(rows) => Self::new(columns, rows),
            Err(issue @ QueryIssue::TableNotFound(_)) => Self::missing(&[], issue),
            Err(issue) => Self::missing(columns, issue),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Render a count with comma thousands separators.
pub fn group_thousands(n: impl Into<u128>) -> String {
    let s = n.into().to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0u64), "0");
        assert_eq!(group_thousands(346u64), "346");
        assert_eq!(group_thousands(1000u64), "1,000");
        assert_eq!(group_thousands(2_000_000u64), "2,000,000");
        assert_eq!(group_thousands(429_000_000u64), "429,000,000");
        assert_eq!(
            group_thousands(u128::from(u64::MAX) * 2),
            "36,893,488,147,419,103,230"
        );
    }

    #[test]
    fn test_missing_carries_message() {
        let result = QueryResult::missing(&["NAME"], QueryIssue::PersonNotFound("nobody".into()));
        assert!(result.is_empty());
        assert_eq!(result.columns, ["NAME"]);
        assert_eq!(result.message.as_deref(), Some("Person nobody not found"));
    }

    #[test]
    fn test_missing_table_drops_headers() {
        let outcome = Err(QueryIssue::TableNotFound("stdnts2".into()));
        let result = QueryResult::from_outcome(&["NAME", "FOLL"], outcome);
        assert!(result.columns.is_empty());
        assert_eq!(result.message.as_deref(), Some("Table stdnts2 not found"));
    }

    #[test]
    fn test_serialize_skips_absent_message() {
        let result = QueryResult::new(&["NAME"], vec![vec!["vivek".into()]]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["rows"][0][0], "vivek");
    }
}
