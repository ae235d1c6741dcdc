//! Follower-ranked suggestions across students and celebrities.

use crate::model::{CELEBRITIES, Person, STUDENTS_SECONDARY, Snapshot, Table};
use crate::query::lookup::{locate_person, require_table};
use crate::query::result::group_thousands;
use crate::query::{QueryIssue, QueryResult};

const RANKED_COLUMNS: &[&str] = &["NAME", "FOLL"];

/// The secondary student table followed by the celebrity table.
fn candidate_tables(snapshot: &Snapshot) -> Result<(&Table, &Table), QueryIssue> {
    let students = require_table(snapshot, STUDENTS_SECONDARY)?;
    let celebrities = require_table(snapshot, CELEBRITIES)?;
    Ok((students, celebrities))
}

/// Sort descending by followers. Stable, so ties keep pool order.
fn ranked_rows<'a>(candidates: impl Iterator<Item = &'a Person>) -> Vec<Vec<String>> {
    let mut ranked: Vec<&Person> = candidates.collect();
    ranked.sort_by(|a, b| b.followers.cmp(&a.followers));
    ranked
        .into_iter()
        .map(|p| vec![p.name.clone(), group_thousands(p.followers)])
        .collect()
}

/// People whose hobby contains `interest`, ignoring case.
pub fn interests(snapshot: &Snapshot, interest: &str) -> QueryResult {
    QueryResult::from_outcome(RANKED_COLUMNS, interest_rows(snapshot, interest))
}

fn interest_rows(snapshot: &Snapshot, interest: &str) -> Result<Vec<Vec<String>>, QueryIssue> {
    let (students, celebrities) = candidate_tables(snapshot)?;
    let needle = interest.to_lowercase();
    let pool = students.rows.iter().chain(&celebrities.rows);
    Ok(ranked_rows(
        pool.filter(|p| p.hobby.to_lowercase().contains(&needle)),
    ))
}

/// People sharing the exact hobby of the subject's direct friend.
///
/// The friend is the secondary-table row whose `id` equals the subject's
/// `friend_record_id`. Only rows named exactly `person_name` are left out;
/// the friend itself may appear.
pub fn you_may_like(snapshot: &Snapshot, person_name: &str) -> QueryResult {
    QueryResult::from_outcome(RANKED_COLUMNS, friend_hobby_rows(snapshot, person_name))
}

fn friend_hobby_rows(
    snapshot: &Snapshot,
    person_name: &str,
) -> Result<Vec<Vec<String>>, QueryIssue> {
    let (students, celebrities) = candidate_tables(snapshot)?;
    let person = locate_person(students, person_name)?;
    let friend = students
        .find_by_id(person.friend_record_id())
        .ok_or_else(|| QueryIssue::FriendNotFound(person_name.to_string()))?;

    let pool = students.rows.iter().chain(&celebrities.rows);
    Ok(ranked_rows(
        pool.filter(|p| p.hobby == friend.hobby && p.name != person_name),
    ))
}
