// Attendance service orchestrates the read-merge-write flow for one date.
//
// Responsibilities
// - Gate every mutation on `date == today`, reading the clock on each call.
// - Validate the student id before any network call.
// - Load the day's roster and the student's identity, merge with the pure rules, persist.
// - Surface store failures unchanged. No retries.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::attendance::application::errors::AttendanceError;
use crate::modules::attendance::core::policy::ReconcilePolicy;
use crate::modules::attendance::core::ports::AttendanceRepository;
use crate::modules::attendance::core::record::roster_for;
use crate::modules::attendance::core::{identity, reconcile};
use crate::modules::attendance::core::student::{AttendanceStatus, StudentEntry, StudentId};
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::iso_date;

/// First day the collection holds attendance for.
pub const DEFAULT_CALENDAR_START: (i32, u32, u32) = (2025, 1, 21);

pub fn default_calendar_start() -> NaiveDate {
    let (year, month, day) = DEFAULT_CALENDAR_START;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarWindow {
    pub first_day: NaiveDate,
    pub today: NaiveDate,
}

pub struct AttendanceService {
    repository: Arc<dyn AttendanceRepository>,
    clock: Arc<dyn Clock>,
    policy: ReconcilePolicy,
    calendar_start: NaiveDate,
}

impl AttendanceService {
    pub fn new(
        repository: Arc<dyn AttendanceRepository>,
        clock: Arc<dyn Clock>,
        policy: ReconcilePolicy,
    ) -> Self {
        Self {
            repository,
            clock,
            policy,
            calendar_start: default_calendar_start(),
        }
    }

    pub fn with_calendar_start(mut self, first_day: NaiveDate) -> Self {
        self.calendar_start = first_day;
        self
    }

    pub fn calendar(&self) -> CalendarWindow {
        CalendarWindow {
            first_day: self.calendar_start,
            today: self.clock.today(),
        }
    }

    pub fn is_editable(&self, date: NaiveDate) -> bool {
        date == self.clock.today()
    }

    pub async fn get_day(&self, date: NaiveDate) -> Result<Vec<StudentEntry>, AttendanceError> {
        Ok(self.repository.fetch_day(date).await?)
    }

    pub async fn mark_status(
        &self,
        date: NaiveDate,
        student_id: StudentId,
        status: AttendanceStatus,
    ) -> Result<Vec<StudentEntry>, AttendanceError> {
        self.ensure_mutable(date)?;
        reconcile::validate_student_id(student_id, &self.policy)
            .inspect_err(|e| tracing::warn!(%e, "mark rejected"))?;

        // Roster and identity come from one snapshot of the store.
        let records = self.repository.list_records().await?;
        let roster = roster_for(&records, date);
        let known = identity::resolve_student(&records, student_id);
        let merged = reconcile::apply_status(
            &roster,
            student_id,
            status,
            known.as_ref(),
            &self.policy,
        )
        .inspect_err(|e| tracing::warn!(%e, "mark rejected"))?;

        let record = self.repository.persist_day(date, merged).await?;
        tracing::info!(
            date = %record.date,
            student_id,
            %status,
            students = record.students.len(),
            "attendance marked"
        );
        Ok(record.students)
    }

    pub async fn remove_student(
        &self,
        date: NaiveDate,
        student_id: StudentId,
    ) -> Result<Vec<StudentEntry>, AttendanceError> {
        self.ensure_mutable(date)?;
        reconcile::validate_student_id(student_id, &self.policy)?;

        let roster = self.repository.fetch_day(date).await?;
        if !roster.iter().any(|entry| entry.id == student_id) {
            tracing::debug!(date = %iso_date(date), student_id, "nothing to remove");
            return Ok(roster);
        }

        let remaining = reconcile::remove_student(&roster, student_id);

        let record = self.repository.persist_day(date, remaining).await?;
        tracing::info!(
            date = %record.date,
            student_id,
            students = record.students.len(),
            "student removed"
        );
        Ok(record.students)
    }

    fn ensure_mutable(&self, date: NaiveDate) -> Result<(), AttendanceError> {
        let today = self.clock.today();
        if date == today {
            return Ok(());
        }
        tracing::warn!(date = %iso_date(date), today = %iso_date(today), "mutation on a closed day");
        Err(AttendanceError::ImmutableDate {
            date: iso_date(date),
            today: iso_date(today),
        })
    }
}
