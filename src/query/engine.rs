//! Query execution engine.

use crate::model::{STUDENTS_PRIMARY, Snapshot};
use crate::query::kind::Query;
use crate::query::result::QueryResult;
use crate::query::{relations, suggest};
use std::sync::{Arc, PoisonError, RwLock};

/// Handle answering the canned queries over the current snapshot.
///
/// The lock only guards the pointer. A query clones the `Arc` and runs
/// without holding it, so it sees either the old or the new snapshot whole.
#[derive(Debug)]
pub struct QueryEngine {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl QueryEngine {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Replace the whole snapshot.
    pub fn update_tables(&self, snapshot: Snapshot) {
        let tables = snapshot.len();
        let next = Arc::new(snapshot);
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = next;
        tracing::debug!(tables, "snapshot replaced");
    }

    /// The snapshot queries currently run against.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn person_friends(&self, person_name: &str, table_name: &str) -> QueryResult {
        relations::person_friends(&self.snapshot(), person_name, table_name)
    }

    /// [`QueryEngine::person_friends`] against `stdnts1`.
    pub fn person_friends_default(&self, person_name: &str) -> QueryResult {
        self.person_friends(person_name, STUDENTS_PRIMARY)
    }

    pub fn friend_of_friend(&self, person_name: &str) -> QueryResult {
        relations::friend_of_friend(&self.snapshot(), person_name)
    }

    pub fn interests(&self, interest: &str) -> QueryResult {
        suggest::interests(&self.snapshot(), interest)
    }

    pub fn you_may_like(&self, person_name: &str) -> QueryResult {
        suggest::you_may_like(&self.snapshot(), person_name)
    }

    /// Run any query kind.
    pub fn execute(&self, query: &Query) -> QueryResult {
        let result = match query {
            Query::Friends { person, table } => self.person_friends(person, table),
            Query::FriendOfFriend { person } => self.friend_of_friend(person),
            Query::Interests { interest } => self.interests(interest),
            Query::YouMayLike { person } => self.you_may_like(person),
        };
        tracing::debug!(
            kind = %query.kind(),
            subject = query.subject(),
            rows = result.len(),
            issue = ?result.message,
            "query executed"
        );
        result
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(Snapshot::seed())
    }
}
