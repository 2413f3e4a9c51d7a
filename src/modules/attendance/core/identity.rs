// Student identity resolution.
//
// There is no roster table: the only evidence that an id belongs to a student, and what
// that student is called, is a past attendance entry. Resolution therefore scans every
// record, in collection order, and takes the first entry with the id.

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::student::{KnownStudent, StudentId};

pub fn resolve_student(records: &[AttendanceRecord], id: StudentId) -> Option<KnownStudent> {
    records
        .iter()
        .flat_map(|record| record.students.iter())
        .find(|entry| entry.id == id)
        .map(KnownStudent::from)
}
