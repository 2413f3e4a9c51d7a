// Attendance records: one document per calendar date.
//
// `AttendanceDocument` is the body written to the store (`{date, students}`).
// `AttendanceRecord` is the same data plus the identifier the store assigned, which is
// absent until the first persistence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::reconcile::normalise;
use crate::modules::attendance::core::student::StudentEntry;
use crate::shared::core::primitives::iso_date;
use crate::shared::infrastructure::remote_collection::StoredDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDocument {
    pub date: String,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

impl AttendanceDocument {
    pub fn new(date: NaiveDate, students: Vec<StudentEntry>) -> Self {
        Self {
            date: iso_date(date),
            students,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub storage_id: Option<String>,
    pub date: String,
    pub students: Vec<StudentEntry>,
}

impl AttendanceRecord {
    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == iso_date(date)
    }
}

/// Roster of the first record for `date`, normalised. Empty if the date was never written.
pub fn roster_for(records: &[AttendanceRecord], date: NaiveDate) -> Vec<StudentEntry> {
    records
        .iter()
        .find(|record| record.is_for(date))
        .map(|record| normalise(&record.students))
        .unwrap_or_default()
}

impl From<StoredDocument<AttendanceDocument>> for AttendanceRecord {
    fn from(stored: StoredDocument<AttendanceDocument>) -> Self {
        Self {
            storage_id: Some(stored.id),
            date: stored.document.date,
            students: stored.document.students,
        }
    }
}
