//! Built-in seed tables.

use crate::model::{Column, Person, Snapshot, Table};

/// Name of the primary student table.
pub const STUDENTS_PRIMARY: &str = "stdnts1";
/// Name of the secondary student table.
pub const STUDENTS_SECONDARY: &str = "stdnts2";
/// Name of the celebrity table.
pub const CELEBRITIES: &str = "celebrities";

fn people_columns() -> Vec<Column> {
    vec![
        Column::new("ID", "NUMBER(3)", false),
        Column::new("NAME", "VARCHAR2(10)", false),
        Column::new("FRND_ID", "NUMBER(3)", false),
        Column::new("HOB", "VARCHAR2(15)", false),
        Column::new("FOLL", "NUMBER(10)", false),
    ]
}

fn students_primary() -> Vec<Person> {
    vec![
        Person::new(1, "pranava", 4, "dance", 58),
        Person::new(2, "srujan", 3, "reading", 234),
        Person::new(3, "shashank", 5, "politics", 584),
        Person::new(4, "vivek", 5, "music", 342),
        Person::new(5, "praneeth", 4, "programming", 9),
        Person::new(6, "yashwanth", 4, "sports", 0),
        Person::new(7, "vishnu", 1, "photography", 156),
        Person::new(8, "suansh", 6, "dance", 346),
        Person::new(9, "ranaveer", 8, "politics", 346),
        Person::new(10, "prateek", 5, "programming", 42),
    ]
}

fn students_secondary() -> Vec<Person> {
    vec![
        Person::new(1, "pranava", 4, "dance", 58),
        Person::new(3, "shashank", 5, "politics", 584),
        Person::new(4, "vivek", 5, "music", 342),
        Person::new(5, "praneeth", 4, "programming", 9),
        Person::new(6, "yashwanth", 4, "education", 0),
        Person::new(7, "vishnu", 1, "photography", 156),
        Person::new(8, "suansh", 6, "dance", 346),
        Person::new(9, "ranaveer", 8, "politics", 346),
        Person::new(10, "prateek", 5, "programming", 42),
    ]
}

fn celebrities() -> Vec<Person> {
    vec![
        Person::new(1, "A.Arjun", 0, "dance", 2_000_000),
        Person::new(2, "N.Modi", 0, "politics", 85_000_000),
        Person::new(3, "phywallah", 0, "education", 2_000_000),
        Person::new(4, "G.Selena", 0, "music", 429_000_000),
    ]
}

impl Snapshot {
    /// The default data set: two student tables and a celebrity table.
    pub fn seed() -> Self {
        Snapshot::from_tables([
            Table::new(STUDENTS_PRIMARY, students_primary(), people_columns()),
            Table::new(STUDENTS_SECONDARY, students_secondary(), people_columns()),
            Table::new(CELEBRITIES, celebrities(), people_columns()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tables() {
        let seed = Snapshot::seed();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed.table(STUDENTS_PRIMARY).map(|t| t.rows.len()), Some(10));
        assert_eq!(seed.table(STUDENTS_SECONDARY).map(|t| t.rows.len()), Some(9));
        assert_eq!(seed.table(CELEBRITIES).map(|t| t.rows.len()), Some(4));
    }

    #[test]
    fn test_seed_schema() {
        let seed = Snapshot::seed();
        for table in seed.tables() {
            let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, ["ID", "NAME", "FRND_ID", "HOB", "FOLL"]);
            assert!(table.columns.iter().all(|c| !c.nullable));
        }
    }
}
