//! Table and subject resolution shared by every query.

use crate::model::{Person, Snapshot, Table};
use crate::query::QueryIssue;

/// Resolve a table by exact name.
pub(super) fn require_table<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a Table, QueryIssue> {
    snapshot
        .table(name)
        .ok_or_else(|| QueryIssue::TableNotFound(name.to_string()))
}

/// Resolve the subject of a query by case-insensitive name.
pub(super) fn locate_person<'a>(table: &'a Table, name: &str) -> Result<&'a Person, QueryIssue> {
    table
        .find_person(name)
        .ok_or_else(|| QueryIssue::PersonNotFound(name.to_string()))
}

/// Drop later rows whose name was already seen. Comparison is case-sensitive.
pub(super) fn unique_by_name<'a>(people: impl IntoIterator<Item = &'a Person>) -> Vec<&'a Person> {
    let mut unique: Vec<&Person> = Vec::new();
    for person in people {
        if !unique.iter().any(|seen| seen.name == person.name) {
            unique.push(person);
        }
    }
    unique
}
