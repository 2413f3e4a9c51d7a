// AttendanceRepository over a RemoteCollectionClient.
//
// The store cannot filter, so every operation starts with a full listing and scans it.
// Cost is linear in the number of stored entries; acceptable for a ten-student roster.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::attendance::core::identity;
use crate::modules::attendance::core::ports::AttendanceRepository;
use crate::modules::attendance::core::record::{AttendanceDocument, AttendanceRecord, roster_for};
use crate::modules::attendance::core::student::{KnownStudent, StudentEntry, StudentId};
use crate::shared::core::primitives::iso_date;
use crate::shared::infrastructure::remote_collection::{
    RemoteCollectionClient, RemoteCollectionError,
};

pub struct RemoteAttendanceRepository<C>
where
    C: RemoteCollectionClient<AttendanceDocument> + 'static,
{
    client: Arc<C>,
}

impl<C> RemoteAttendanceRepository<C>
where
    C: RemoteCollectionClient<AttendanceDocument> + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

fn find_day(records: Vec<AttendanceRecord>, date: NaiveDate) -> Option<AttendanceRecord> {
    records.into_iter().find(|record| record.is_for(date))
}

#[async_trait]
impl<C> AttendanceRepository for RemoteAttendanceRepository<C>
where
    C: RemoteCollectionClient<AttendanceDocument> + 'static,
{
    async fn list_records(&self) -> Result<Vec<AttendanceRecord>, RemoteCollectionError> {
        let documents = self.client.list_all().await?;
        Ok(documents.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<StudentEntry>, RemoteCollectionError> {
        let records = self.list_records().await?;
        let scanned = records.len();
        let students = roster_for(&records, date);
        tracing::debug!(
            date = %iso_date(date),
            scanned,
            students = students.len(),
            "fetched day"
        );
        Ok(students)
    }

    async fn resolve_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<KnownStudent>, RemoteCollectionError> {
        let records = self.list_records().await?;
        Ok(identity::resolve_student(&records, student_id))
    }

    async fn persist_day(
        &self,
        date: NaiveDate,
        students: Vec<StudentEntry>,
    ) -> Result<AttendanceRecord, RemoteCollectionError> {
        let document = AttendanceDocument::new(date, students);
        let existing = find_day(self.list_records().await?, date);

        let stored = match existing.and_then(|record| record.storage_id) {
            Some(storage_id) => {
                tracing::info!(date = %document.date, %storage_id, "replacing attendance record");
                self.client.replace(&storage_id, &document).await?
            }
            None => {
                tracing::info!(date = %document.date, "creating attendance record");
                self.client.create(&document).await?
            }
        };
        Ok(AttendanceRecord::from(stored))
    }
}
