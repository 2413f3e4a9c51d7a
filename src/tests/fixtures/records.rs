// Shared attendance fixtures.
//
// `json/collection.json` is a small history shaped like the mockapi.io collection the
// service talks to in production: three days, string storage ids, mixed student id
// encodings, and no entry for student 7.

use chrono::NaiveDate;

use crate::modules::attendance::core::record::{AttendanceDocument, AttendanceRecord};
use crate::modules::attendance::core::student::{AttendanceStatus, StudentEntry, StudentId};
use crate::shared::core::primitives::parse_iso_date;
use crate::shared::infrastructure::remote_collection::StoredDocument;
use crate::shared::infrastructure::remote_collection::in_memory::InMemoryRemoteCollection;

pub const FIRST_DAY: &str = "2025-01-21";
pub const SECOND_DAY: &str = "2025-01-22";
pub const LAST_DAY: &str = "2025-01-23";

const COLLECTION_JSON: &str = include_str!("json/collection.json");

pub fn day(value: &str) -> NaiveDate {
    parse_iso_date(value).unwrap()
}

pub fn stored_documents() -> Vec<StoredDocument<AttendanceDocument>> {
    serde_json::from_str(COLLECTION_JSON).unwrap()
}

pub fn history() -> Vec<AttendanceRecord> {
    stored_documents()
        .into_iter()
        .map(AttendanceRecord::from)
        .collect()
}

pub fn seeded_collection() -> InMemoryRemoteCollection<AttendanceDocument> {
    InMemoryRemoteCollection::with_documents(stored_documents())
}

pub struct RosterBuilder {
    inner: Vec<StudentEntry>,
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn present(self, id: StudentId, name: &str) -> Self {
        self.with(id, name, AttendanceStatus::Present)
    }

    pub fn absent(self, id: StudentId, name: &str) -> Self {
        self.with(id, name, AttendanceStatus::Absent)
    }

    pub fn leave(self, id: StudentId, name: &str) -> Self {
        self.with(id, name, AttendanceStatus::Leave)
    }

    pub fn with(mut self, id: StudentId, name: &str, status: AttendanceStatus) -> Self {
        self.inner.push(StudentEntry::new(id, name, status));
        self
    }

    pub fn build(self) -> Vec<StudentEntry> {
        self.inner
    }
}

#[cfg(test)]
mod attendance_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_history_fixture() {
        let records = history();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, FIRST_DAY);
        assert_eq!(records[2].date, LAST_DAY);
        assert!(
            records
                .iter()
                .flat_map(|record| &record.students)
                .all(|entry| entry.id != 7)
        );
    }

    #[rstest]
    fn it_should_build_a_roster_in_call_order() {
        let roster = RosterBuilder::new()
            .leave(4, "Danish")
            .present(2, "Bilal")
            .absent(9, "Omar")
            .build();
        let ids: Vec<_> = roster.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![4, 2, 9]);
        assert_eq!(roster[0].status, AttendanceStatus::Leave);
    }
}
