// Composition root for the attendance service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the remote collection adapter chosen by config.
// - Wire it into the repository and the attendance service.
// - Expose the service over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::remote_repository::RemoteAttendanceRepository;
use crate::modules::attendance::application::attendance_service::AttendanceService;
use crate::modules::attendance::core::ports::AttendanceRepository;
use crate::modules::attendance::core::record::AttendanceDocument;
use crate::shared::core::clock::SystemClock;
use crate::shared::infrastructure::remote_collection::http::HttpRemoteCollection;
use crate::shared::infrastructure::remote_collection::in_memory::InMemoryRemoteCollection;
use crate::shell::config::{Config, StoreKind};
use crate::shell::state::AppState;

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let repository: Arc<dyn AttendanceRepository> = match config.store {
        StoreKind::Remote => {
            let client = HttpRemoteCollection::<AttendanceDocument>::new(
                config.collection_url.clone(),
                config.remote_timeout,
            )?;
            tracing::info!(url = client.collection_url(), "using remote collection");
            Arc::new(RemoteAttendanceRepository::new(Arc::new(client)))
        }
        StoreKind::InMemory => {
            tracing::warn!("using in-memory collection, attendance is lost on restart");
            let client = InMemoryRemoteCollection::<AttendanceDocument>::new();
            Arc::new(RemoteAttendanceRepository::new(Arc::new(client)))
        }
    };

    let service = AttendanceService::new(repository, Arc::new(SystemClock), config.policy)
        .with_calendar_start(config.calendar_start);

    Ok(AppState {
        service: Arc::new(service),
    })
}

#[cfg(test)]
mod shell_tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn it_should_wire_an_in_memory_service() {
        let mut vars = HashMap::new();
        vars.insert("ATTENDANCE_STORE".to_string(), "in-memory".to_string());
        let config = Config::from_vars(&vars).unwrap();
        let state = build_state(&config).unwrap();
        let today = state.service.calendar().today;
        assert!(state.service.get_day(today).await.unwrap().is_empty());
        assert!(state.service.is_editable(today));
    }
}
