//! Friend-circle traversals.
//!
//! Here `friend_id` is a clique key: every row sharing a person's
//! `friend_group_id` belongs to that person's circle.

use crate::model::{Person, STUDENTS_PRIMARY, STUDENTS_SECONDARY, Snapshot, Table};
use crate::query::lookup::{locate_person, require_table, unique_by_name};
use crate::query::{QueryIssue, QueryResult};

const NAME_COLUMNS: &[&str] = &["NAME"];

/// Rows of `table` in `person`'s circle, excluding `person` by exact name.
fn circle<'a>(
    table: &'a Table,
    person: &Person,
) -> impl Iterator<Item = &'a Person> + use<'a> {
    let group = person.friend_group_id();
    let name = person.name.clone();
    table
        .rows
        .iter()
        .filter(move |p| p.friend_group_id() == group && p.name != name)
}

fn name_rows(people: &[&Person]) -> Vec<Vec<String>> {
    people.iter().map(|p| vec![p.name.clone()]).collect()
}

/// Everyone in the same friend circle as `person_name` within `table_name`.
pub fn person_friends(snapshot: &Snapshot, person_name: &str, table_name: &str) -> QueryResult {
    QueryResult::from_outcome(NAME_COLUMNS, circle_names(snapshot, person_name, table_name))
}

fn circle_names(
    snapshot: &Snapshot,
    person_name: &str,
    table_name: &str,
) -> Result<Vec<Vec<String>>, QueryIssue> {
    let table = require_table(snapshot, table_name)?;
    let person = locate_person(table, person_name)?;
    Ok(name_rows(&unique_by_name(circle(table, person))))
}

/// Circle-mates in the secondary table of each of the subject's circle-mates
/// in the primary table.
///
/// The subject is excluded by comparing against `person_name` as typed, not
/// the matched row's name.
pub fn friend_of_friend(snapshot: &Snapshot, person_name: &str) -> QueryResult {
    QueryResult::from_outcome(NAME_COLUMNS, second_degree_names(snapshot, person_name))
}

fn second_degree_names(
    snapshot: &Snapshot,
    person_name: &str,
) -> Result<Vec<Vec<String>>, QueryIssue> {
    let primary = require_table(snapshot, STUDENTS_PRIMARY)?;
    let secondary = require_table(snapshot, STUDENTS_SECONDARY)?;
    let person = locate_person(primary, person_name)?;

    let second_degree = circle(primary, person).flat_map(|friend| circle(secondary, friend));
    let found: Vec<&Person> = unique_by_name(second_degree)
        .into_iter()
        .filter(|p| p.name != person_name)
        .collect();
    Ok(name_rows(&found))
}
