//! Relationship query engine.

mod engine;
mod kind;
mod lookup;
mod relations;
mod result;
mod suggest;

pub use engine::QueryEngine;
pub use kind::{Query, QueryKind};
pub use relations::{friend_of_friend, person_friends};
pub use result::{QueryIssue, QueryResult, group_thousands};
pub use suggest::{interests, you_may_like};
