// Runtime configuration read from the environment (and `.env` when present).
//
// Parsing is separate from environment access so it can be exercised with plain maps.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use chrono::NaiveDate;

use crate::modules::attendance::application::attendance_service::default_calendar_start;
use crate::modules::attendance::core::policy::{
    ReconcilePolicy, StudentIdRange, UnknownStudentPolicy,
};
use crate::modules::attendance::core::student::StudentId;
use crate::shared::core::primitives::parse_iso_date;

pub const DEFAULT_COLLECTION_URL: &str = "https://677cae354496848554c73dca.mockapi.io/students";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Remote,
    InMemory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub store: StoreKind,
    pub collection_url: String,
    pub remote_timeout: Duration,
    pub policy: ReconcilePolicy,
    pub calendar_start: NaiveDate,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> anyhow::Result<Self> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let server_addr: SocketAddr = get("ATTENDANCE_SERVER_ADDR")
            .unwrap_or("0.0.0.0:8080")
            .parse()
            .context("ATTENDANCE_SERVER_ADDR must be a socket address")?;

        let store = match get("ATTENDANCE_STORE").unwrap_or("remote") {
            "remote" => StoreKind::Remote,
            "in-memory" | "memory" => StoreKind::InMemory,
            other => bail!("ATTENDANCE_STORE must be \"remote\" or \"in-memory\", got {other:?}"),
        };

        let collection_url = get("ATTENDANCE_COLLECTION_URL")
            .unwrap_or(DEFAULT_COLLECTION_URL)
            .to_string();

        let timeout_secs: u64 = get("ATTENDANCE_REMOTE_TIMEOUT_SECS")
            .unwrap_or("10")
            .parse()
            .context("ATTENDANCE_REMOTE_TIMEOUT_SECS must be a whole number of seconds")?;

        let min: StudentId = get("ATTENDANCE_STUDENT_ID_MIN")
            .unwrap_or("1")
            .parse()
            .context("ATTENDANCE_STUDENT_ID_MIN must be a non-negative integer")?;
        let max: StudentId = get("ATTENDANCE_STUDENT_ID_MAX")
            .unwrap_or("10")
            .parse()
            .context("ATTENDANCE_STUDENT_ID_MAX must be a non-negative integer")?;
        if min > max {
            bail!("student id range is empty: {min}..={max}");
        }

        let unknown_student: UnknownStudentPolicy = get("ATTENDANCE_UNKNOWN_STUDENT_POLICY")
            .unwrap_or("reject")
            .parse()
            .map_err(anyhow::Error::msg)?;

        let calendar_start = match get("ATTENDANCE_CALENDAR_START") {
            Some(raw) => parse_iso_date(raw)
                .with_context(|| format!("ATTENDANCE_CALENDAR_START {raw:?} is not YYYY-MM-DD"))?,
            None => default_calendar_start(),
        };

        Ok(Self {
            server_addr,
            store,
            collection_url,
            remote_timeout: Duration::from_secs(timeout_secs),
            policy: ReconcilePolicy {
                id_range: StudentIdRange::new(min, max),
                unknown_student,
            },
            calendar_start,
        })
    }
}
