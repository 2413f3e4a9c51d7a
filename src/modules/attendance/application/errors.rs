use thiserror::Error;

use crate::modules::attendance::core::reconcile::ReconcileError;
use crate::modules::attendance::core::student::StudentId;
use crate::shared::infrastructure::remote_collection::RemoteCollectionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("student id {id} is outside the roster range {min}..={max}")]
    Validation {
        id: StudentId,
        min: StudentId,
        max: StudentId,
    },

    #[error("student id {0} does not appear in any attendance record")]
    UnknownStudent(StudentId),

    #[error("attendance for {date} is read-only, only {today} can be changed")]
    ImmutableDate { date: String, today: String },

    #[error(transparent)]
    Remote(#[from] RemoteCollectionError),
}

impl AttendanceError {
    /// Rejections decided locally; retrying them cannot succeed.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }
}

impl From<ReconcileError> for AttendanceError {
    fn from(value: ReconcileError) -> Self {
        match value {
            ReconcileError::Validation { id, min, max } => Self::Validation { id, min, max },
            ReconcileError::UnknownStudent(id) => Self::UnknownStudent(id),
        }
    }
}
