use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::modules::attendance::application::errors::AttendanceError;
use crate::modules::attendance::core::student::{AttendanceStatus, StudentEntry, StudentId};
use crate::shared::core::primitives::{iso_date, parse_iso_date};
use crate::shared::infrastructure::remote_collection::RemoteCollectionError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MarkStatusBody {
    pub student_id: StudentId,
    pub status: AttendanceStatus,
}

#[derive(Serialize)]
pub struct DayResponse {
    pub date: String,
    pub editable: bool,
    pub students: Vec<StudentEntry>,
}

#[derive(Serialize)]
pub struct RosterResponse {
    pub date: String,
    pub students: Vec<StudentEntry>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn status_for(error: &AttendanceError) -> StatusCode {
    match error {
        AttendanceError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AttendanceError::UnknownStudent(_) => StatusCode::NOT_FOUND,
        AttendanceError::ImmutableDate { .. } => StatusCode::FORBIDDEN,
        AttendanceError::Remote(RemoteCollectionError::NotFound { .. }) => StatusCode::CONFLICT,
        AttendanceError::Remote(RemoteCollectionError::Transport(_)) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        error_response(status_for(&self), self.to_string())
    }
}

fn parse_date(raw: &str) -> Result<chrono::NaiveDate, Response> {
    parse_iso_date(raw).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("invalid date {raw:?}, expected YYYY-MM-DD"),
        )
    })
}

pub async fn calendar(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.calendar())
}

pub async fn get_day(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let date = match parse_date(&date) {
        Ok(d) => d,
        Err(response) => return response,
    };
    match state.service.get_day(date).await {
        Ok(students) => Json(DayResponse {
            date: iso_date(date),
            editable: state.service.is_editable(date),
            students,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn mark_status(
    State(state): State<AppState>,
    Path(date): Path<String>,
    body: Result<Json<MarkStatusBody>, JsonRejection>,
) -> Response {
    let date = match parse_date(&date) {
        Ok(d) => d,
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };
    match state
        .service
        .mark_status(date, body.student_id, body.status)
        .await
    {
        Ok(students) => Json(RosterResponse {
            date: iso_date(date),
            students,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn remove_student(
    State(state): State<AppState>,
    Path((date, student_id)): Path<(String, StudentId)>,
) -> Response {
    let date = match parse_date(&date) {
        Ok(d) => d,
        Err(response) => return response,
    };
    match state.service.remove_student(date, student_id).await {
        Ok(students) => Json(RosterResponse {
            date: iso_date(date),
            students,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
