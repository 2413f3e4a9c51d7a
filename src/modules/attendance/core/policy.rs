use std::ops::RangeInclusive;

use crate::modules::attendance::core::student::StudentId;

/// Closed range of student ids a deployment accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdRange {
    pub min: StudentId,
    pub max: StudentId,
}

impl StudentIdRange {
    pub const fn new(min: StudentId, max: StudentId) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.as_range().contains(&id)
    }

    pub fn as_range(&self) -> RangeInclusive<StudentId> {
        self.min..=self.max
    }
}

impl Default for StudentIdRange {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// What to do with an in-range id that no historical record mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStudentPolicy {
    #[default]
    Reject,
    /// Accept the id and give the student a placeholder name.
    Admit,
}

impl std::str::FromStr for UnknownStudentPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "admit" => Ok(Self::Admit),
            other => Err(format!(
                "unknown student policy {other:?}, expected \"reject\" or \"admit\""
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcilePolicy {
    pub id_range: StudentIdRange,
    pub unknown_student: UnknownStudentPolicy,
}

pub fn placeholder_name(id: StudentId) -> String {
    format!("Student {id}")
}
