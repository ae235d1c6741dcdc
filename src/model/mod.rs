//! People tables consumed by the query engine.

mod person;
mod seed;
mod snapshot;
mod table;

pub use person::Person;
pub use seed::{CELEBRITIES, STUDENTS_PRIMARY, STUDENTS_SECONDARY};
pub use snapshot::Snapshot;
pub use table::{Column, Table};
