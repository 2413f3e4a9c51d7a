use crate::modules::attendance::application::attendance_service::AttendanceService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AttendanceService>,
}
