//! Person records.

use serde::{Deserialize, Serialize};

/// One row of a people table.
///
/// `id` is unique within its owning table only. `friend_id` is read two ways
/// depending on the query, so callers should go through
/// [`Person::friend_group_id`] or [`Person::friend_record_id`] rather than the
/// raw field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(alias = "frnd_id")]
    pub friend_id: i64,
    #[serde(alias = "hob")]
    pub hobby: String,
    #[serde(alias = "foll")]
    pub followers: u64,
}

impl Person {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        friend_id: i64,
        hobby: impl Into<String>,
        followers: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            friend_id,
            hobby: hobby.into(),
            followers,
        }
    }

    /// `friend_id` as a clique key: everyone sharing it is a mutual friend.
    pub fn friend_group_id(&self) -> i64 {
        self.friend_id
    }

    /// `friend_id` as a pointer to the `id` of a single friend row.
    pub fn friend_record_id(&self) -> i64 {
        self.friend_id
    }

    /// Case-insensitive name match used when looking a subject up.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
