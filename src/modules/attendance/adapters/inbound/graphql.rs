use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::student::{AttendanceStatus, StudentEntry};
use crate::shared::core::primitives::{iso_date, parse_iso_date};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GqlAttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl From<GqlAttendanceStatus> for AttendanceStatus {
    fn from(v: GqlAttendanceStatus) -> Self {
        match v {
            GqlAttendanceStatus::Present => Self::Present,
            GqlAttendanceStatus::Absent => Self::Absent,
            GqlAttendanceStatus::Leave => Self::Leave,
        }
    }
}

impl From<AttendanceStatus> for GqlAttendanceStatus {
    fn from(v: AttendanceStatus) -> Self {
        match v {
            AttendanceStatus::Present => Self::Present,
            AttendanceStatus::Absent => Self::Absent,
            AttendanceStatus::Leave => Self::Leave,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStudentEntry {
    pub id: u32,
    pub name: String,
    pub status: GqlAttendanceStatus,
}

impl From<StudentEntry> for GqlStudentEntry {
    fn from(v: StudentEntry) -> Self {
        Self {
            id: v.id,
            name: v.name,
            status: v.status.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceDay {
    pub date: String,
    pub editable: bool,
    pub students: Vec<GqlStudentEntry>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlCalendar {
    pub first_day: String,
    pub today: String,
}

fn parse_date(raw: &str) -> GqlResult<chrono::NaiveDate> {
    parse_iso_date(raw)
        .map_err(|_| async_graphql::Error::new(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}

fn roster(students: Vec<StudentEntry>) -> Vec<GqlStudentEntry> {
    students.into_iter().map(Into::into).collect()
}

#[derive(Default)]
pub struct AttendanceQuery;

#[Object]
impl AttendanceQuery {
    async fn attendance_day(&self, context: &Context<'_>, date: String) -> GqlResult<GqlAttendanceDay> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_date(&date)?;
        let students = state.service.get_day(date).await?;
        Ok(GqlAttendanceDay {
            date: iso_date(date),
            editable: state.service.is_editable(date),
            students: roster(students),
        })
    }

    async fn calendar(&self, context: &Context<'_>) -> GqlCalendar {
        let window = context.data_unchecked::<AppState>().service.calendar();
        GqlCalendar {
            first_day: iso_date(window.first_day),
            today: iso_date(window.today),
        }
    }
}

#[derive(Default)]
pub struct AttendanceMutation;

#[Object]
impl AttendanceMutation {
    async fn mark_status(
        &self,
        context: &Context<'_>,
        date: String,
        student_id: u32,
        status: GqlAttendanceStatus,
    ) -> GqlResult<Vec<GqlStudentEntry>> {
        let state = context.data_unchecked::<AppState>();
        let students = state
            .service
            .mark_status(parse_date(&date)?, student_id, status.into())
            .await?;
        Ok(roster(students))
    }

    async fn remove_student(
        &self,
        context: &Context<'_>,
        date: String,
        student_id: u32,
    ) -> GqlResult<Vec<GqlStudentEntry>> {
        let state = context.data_unchecked::<AppState>();
        let students = state
            .service
            .remove_student(parse_date(&date)?, student_id)
            .await?;
        Ok(roster(students))
    }
}
