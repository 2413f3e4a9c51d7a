use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::shared::infrastructure::remote_collection::{
    RemoteCollectionClient, RemoteCollectionError, StoredDocument,
};

impl From<reqwest::Error> for RemoteCollectionError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// REST collection: `GET <url>`, `POST <url>`, `PUT <url>/<id>`.
#[derive(Debug, Clone)]
pub struct HttpRemoteCollection<D> {
    client: Client,
    collection_url: String,
    _document: PhantomData<fn() -> D>,
}

impl<D> HttpRemoteCollection<D> {
    pub fn new(
        collection_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteCollectionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, collection_url))
    }

    pub fn with_client(client: Client, collection_url: impl Into<String>) -> Self {
        Self {
            client,
            collection_url: collection_url.into().trim_end_matches('/').to_string(),
            _document: PhantomData,
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn document_url(&self, storage_id: &str) -> String {
        format!("{}/{}", self.collection_url, storage_id)
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteCollectionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteCollectionError::Transport(format!(
            "unexpected status {status}: {body}"
        )));
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl<D> RemoteCollectionClient<D> for HttpRemoteCollection<D>
where
    D: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<StoredDocument<D>>, RemoteCollectionError> {
        tracing::debug!(url = %self.collection_url, "listing remote collection");
        let response = self.client.get(&self.collection_url).send().await?;
        let raw: Vec<serde_json::Value> = decode(response).await?;
        let total = raw.len();
        let documents: Vec<StoredDocument<D>> = raw
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<StoredDocument<D>>(value)
                    .inspect_err(|e| tracing::warn!(%e, "skipping undecodable document"))
                    .ok()
            })
            .collect();
        if documents.len() < total {
            tracing::warn!(
                skipped = total - documents.len(),
                total,
                "remote collection holds foreign documents"
            );
        }
        Ok(documents)
    }

    async fn create(&self, document: &D) -> Result<StoredDocument<D>, RemoteCollectionError> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(document)
            .send()
            .await?;
        decode(response).await
    }

    async fn replace(
        &self,
        storage_id: &str,
        document: &D,
    ) -> Result<StoredDocument<D>, RemoteCollectionError> {
        let response = self
            .client
            .put(self.document_url(storage_id))
            .json(document)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RemoteCollectionError::NotFound {
                storage_id: storage_id.to_string(),
            });
        }
        decode(response).await
    }
}
