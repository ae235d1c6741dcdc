//! Summary statistics over the people tables.

use crate::model::{CELEBRITIES, Person, STUDENTS_PRIMARY, STUDENTS_SECONDARY, Snapshot};
use serde::Serialize;
use std::collections::BTreeSet;

/// How many interests `top_interests` keeps.
const TOP_INTERESTS: usize = 5;

/// Follower figures across every person counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowerStats {
    /// Sum of all follower counts; wider than a single count.
    pub total: u128,
    pub average: Option<u64>,
    pub max: Option<u64>,
    pub min: Option<u64>,
}

/// One hobby and how many people list it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestCount {
    pub hobby: String,
    pub count: usize,
}

/// Dashboard numbers for a snapshot.
///
/// People are the rows of `stdnts1`, `stdnts2` and `celebrities` in that
/// order; a missing table contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub total_people: usize,
    pub celebrities: usize,
    pub connections: usize,
    pub unique_groups: usize,
    pub followers: FollowerStats,
    pub top_interests: Vec<InterestCount>,
}

impl Analytics {
    pub fn compute(snapshot: &Snapshot) -> Self {
        let primary = rows_of(snapshot, STUDENTS_PRIMARY);
        let secondary = rows_of(snapshot, STUDENTS_SECONDARY);
        let celebrities = rows_of(snapshot, CELEBRITIES);

        let students = || primary.iter().chain(secondary);
        let people: Vec<&Person> = students().chain(celebrities).collect();

        let unique_groups = students()
            .map(Person::friend_group_id)
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total_people: people.len(),
            celebrities: celebrities.len(),
            connections: primary.len() + secondary.len(),
            unique_groups,
            followers: follower_stats(&people),
            top_interests: top_interests(&people),
        }
    }
}

fn rows_of<'a>(snapshot: &'a Snapshot, name: &str) -> &'a [Person] {
    snapshot.table(name).map(|t| t.rows.as_slice()).unwrap_or(&[])
}

fn follower_stats(people: &[&Person]) -> FollowerStats {
    let total: u128 = people.iter().map(|p| u128::from(p.followers)).sum();
    let count = people.len() as u128;
    // Rounds half up; never exceeds the largest count, so it fits a u64.
    let average = (count > 0)
        .then(|| (total + count / 2) / count)
        .and_then(|avg| u64::try_from(avg).ok());
    FollowerStats {
        total,
        average,
        max: people.iter().map(|p| p.followers).max(),
        min: people.iter().map(|p| p.followers).min(),
    }
}

/// Hobby counts, most common first; ties keep first-seen order.
fn top_interests(people: &[&Person]) -> Vec<InterestCount> {
    let mut counts: Vec<InterestCount> = Vec::new();
    for person in people {
        match counts.iter_mut().find(|c| c.hobby == person.hobby) {
            Some(entry) => entry.count += 1,
            None => counts.push(InterestCount {
                hobby: person.hobby.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_INTERESTS);
    counts
}
