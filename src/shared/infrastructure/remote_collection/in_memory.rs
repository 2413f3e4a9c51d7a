// In memory implementation of the RemoteCollectionClient port.
//
// Purpose
// - Support service tests and local development without a network.
//
// Responsibilities
// - Keep documents in insertion order, like a REST collection listing.
// - Assign UUIDv7 identifiers on create.
// - Log which operations were served so tests can tell a create from a replace.
// - Simulate failures: offline mode, vanished documents, slow writes.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::shared::infrastructure::remote_collection::{
    RemoteCollectionClient, RemoteCollectionError, StoredDocument,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOperation {
    ListAll,
    Create { storage_id: String },
    Replace { storage_id: String },
}

pub struct InMemoryRemoteCollection<D> {
    documents: RwLock<Vec<StoredDocument<D>>>,
    operations: Mutex<Vec<RemoteOperation>>,
    is_offline: bool,
    write_delay: Option<Duration>,
}

impl<D> Default for InMemoryRemoteCollection<D> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            operations: Mutex::new(Vec::new()),
            is_offline: false,
            write_delay: None,
        }
    }
}

impl<D: Clone> InMemoryRemoteCollection<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<StoredDocument<D>>) -> Self {
        Self {
            documents: RwLock::new(documents),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Hold every create and replace for `ms` milliseconds before it lands.
    pub fn set_delay_write_ms(&mut self, ms: u64) {
        self.write_delay = Some(Duration::from_millis(ms));
    }

    pub async fn documents(&self) -> Vec<StoredDocument<D>> {
        self.documents.read().await.clone()
    }

    pub async fn operations(&self) -> Vec<RemoteOperation> {
        self.operations.lock().await.clone()
    }

    pub async fn writes(&self) -> Vec<RemoteOperation> {
        self.operations
            .lock()
            .await
            .iter()
            .filter(|op| !matches!(op, RemoteOperation::ListAll))
            .cloned()
            .collect()
    }

    /// Drop a document as if another client deleted it out of band.
    pub async fn forget(&self, storage_id: &str) -> bool {
        let mut guard = self.documents.write().await;
        let before = guard.len();
        guard.retain(|doc| doc.id != storage_id);
        guard.len() != before
    }

    fn ensure_online(&self) -> Result<(), RemoteCollectionError> {
        if self.is_offline {
            return Err(RemoteCollectionError::Transport(
                "Remote collection offline".into(),
            ));
        }
        Ok(())
    }

    async fn hold_write(&self) {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait::async_trait]
impl<D> RemoteCollectionClient<D> for InMemoryRemoteCollection<D>
where
    D: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<StoredDocument<D>>, RemoteCollectionError> {
        self.ensure_online()?;
        self.operations.lock().await.push(RemoteOperation::ListAll);
        Ok(self.documents.read().await.clone())
    }

    async fn create(&self, document: &D) -> Result<StoredDocument<D>, RemoteCollectionError> {
        self.ensure_online()?;
        self.hold_write().await;
        let stored = StoredDocument {
            id: Uuid::now_v7().to_string(),
            document: document.clone(),
        };
        self.documents.write().await.push(stored.clone());
        self.operations.lock().await.push(RemoteOperation::Create {
            storage_id: stored.id.clone(),
        });
        Ok(stored)
    }

    async fn replace(
        &self,
        storage_id: &str,
        document: &D,
    ) -> Result<StoredDocument<D>, RemoteCollectionError> {
        self.ensure_online()?;
        self.hold_write().await;
        let stored = {
            let mut guard = self.documents.write().await;
            let slot = guard
                .iter_mut()
                .find(|doc| doc.id == storage_id)
                .ok_or_else(|| RemoteCollectionError::NotFound {
                    storage_id: storage_id.to_string(),
                })?;
            slot.document = document.clone();
            slot.clone()
        };
        self.operations.lock().await.push(RemoteOperation::Replace {
            storage_id: storage_id.to_string(),
        });
        Ok(stored)
    }
}
