// Port over a remote document collection that only offers whole-collection reads and
// per-document create or full replace.
//
// Boundaries
// - No filtering, no partial update, no concurrency token. Callers compensate.
// - Adapters live in the sibling modules: `in_memory` for tests and local development,
//   `http` for a REST endpoint such as mockapi.io.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::shared::core::primitives::deserialize_opaque_id;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteCollectionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("document {storage_id} not found")]
    NotFound { storage_id: String },
}

/// A document as the store returns it, with the identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument<D> {
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    #[serde(flatten)]
    pub document: D,
}

#[async_trait]
pub trait RemoteCollectionClient<D>: Send + Sync
where
    D: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<StoredDocument<D>>, RemoteCollectionError>;

    async fn create(&self, document: &D) -> Result<StoredDocument<D>, RemoteCollectionError>;

    async fn replace(
        &self,
        storage_id: &str,
        document: &D,
    ) -> Result<StoredDocument<D>, RemoteCollectionError>;
}

pub mod http;
pub mod in_memory;
