// Pure merge rules for a single day's roster.
//
// Responsibilities
// - Validate the target id against the id universe.
// - Insert or update one student's status, or remove one student.
// - Leave the roster sorted ascending by id with unique ids, whatever the input looked like.
// - Never perform input or output.

use crate::modules::attendance::core::policy::{
    ReconcilePolicy, UnknownStudentPolicy, placeholder_name,
};
use crate::modules::attendance::core::student::{
    AttendanceStatus, KnownStudent, StudentEntry, StudentId,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("student id {id} is outside the roster range {min}..={max}")]
    Validation {
        id: StudentId,
        min: StudentId,
        max: StudentId,
    },

    #[error("student id {0} does not appear in any attendance record")]
    UnknownStudent(StudentId),
}

pub fn validate_student_id(id: StudentId, policy: &ReconcilePolicy) -> Result<(), ReconcileError> {
    if policy.id_range.contains(id) {
        Ok(())
    } else {
        Err(ReconcileError::Validation {
            id,
            min: policy.id_range.min,
            max: policy.id_range.max,
        })
    }
}

/// Sorted by id, first occurrence wins on duplicates.
pub fn normalise(roster: &[StudentEntry]) -> Vec<StudentEntry> {
    let mut students = roster.to_vec();
    students.sort_by_key(|entry| entry.id);
    students.dedup_by_key(|entry| entry.id);
    students
}

pub fn apply_status(
    roster: &[StudentEntry],
    student_id: StudentId,
    status: AttendanceStatus,
    known_student: Option<&KnownStudent>,
    policy: &ReconcilePolicy,
) -> Result<Vec<StudentEntry>, ReconcileError> {
    validate_student_id(student_id, policy)?;

    let name = match (known_student, policy.unknown_student) {
        (Some(known), _) => known.name.clone(),
        (None, UnknownStudentPolicy::Admit) => placeholder_name(student_id),
        (None, UnknownStudentPolicy::Reject) => {
            return Err(ReconcileError::UnknownStudent(student_id));
        }
    };

    let mut students = normalise(roster);
    match students.iter_mut().find(|entry| entry.id == student_id) {
        Some(entry) => entry.status = status,
        None => students.push(StudentEntry::new(student_id, name, status)),
    }
    students.sort_by_key(|entry| entry.id);
    Ok(students)
}

pub fn remove_student(roster: &[StudentEntry], student_id: StudentId) -> Vec<StudentEntry> {
    let mut students = normalise(roster);
    students.retain(|entry| entry.id != student_id);
    students
}
