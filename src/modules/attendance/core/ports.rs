// Ports define what the attendance core needs from storage, without implementing it.
//
// Purpose
// - Keep the read-then-write cycle behind one trait so a store with conditional writes can
//   replace the remote collection without touching the merge rules.
//
// Consistency
// - `persist_day` is not atomic. Between its read and its write another client may write
//   the same date; the later write wins and nothing detects the overlap.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::student::{KnownStudent, StudentEntry, StudentId};
use crate::shared::infrastructure::remote_collection::RemoteCollectionError;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Every record in the store, in the order the store lists them.
    async fn list_records(&self) -> Result<Vec<AttendanceRecord>, RemoteCollectionError>;

    /// The roster stored for `date`, sorted by id with unique ids, or an empty roster if the
    /// date was never written.
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<StudentEntry>, RemoteCollectionError>;

    /// Name bound to `student_id` anywhere in history.
    async fn resolve_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<KnownStudent>, RemoteCollectionError>;

    /// Replace the record for `date` if one exists, otherwise create it.
    async fn persist_day(
        &self,
        date: NaiveDate,
        students: Vec<StudentEntry>,
    ) -> Result<AttendanceRecord, RemoteCollectionError>;
}
