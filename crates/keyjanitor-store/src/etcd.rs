//! etcd-backed implementation of `KeyStore`

use crate::{StoreError, TransportCredentials};
use async_trait::async_trait;
use etcd_client::{Client, ConnectOptions, GetOptions};
use keyjanitor_domain::{quote_bytes, KeyRecord, KeyStore};
use std::future::Future;
use std::time::Duration;

/// etcd v3 store
///
/// Holds a single client connection for the whole run. Each request is bounded
/// by the timeout passed to it.
pub struct EtcdStore {
    client: Client,
}

impl EtcdStore {
    /// Connect to the given endpoints
    ///
    /// `timeout` bounds both the dial and each request made by the client.
    pub async fn connect(
        endpoints: &[String],
        credentials: Option<TransportCredentials>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        if endpoints.is_empty() {
            return Err(StoreError::Connect("no endpoints given".to_string()));
        }

        let mut options = ConnectOptions::new()
            .with_connect_timeout(timeout)
            .with_timeout(timeout);
        if let Some(credentials) = &credentials {
            options = options.with_tls(credentials.tls_options());
        }

        tracing::debug!(
            "Connecting to etcd at {} (tls: {})",
            endpoints.join(","),
            credentials.is_some()
        );

        let client = bounded(timeout, Client::connect(endpoints, Some(options)))
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Run a request under a deadline, mapping elapse to `StoreError::Timeout`
async fn bounded<T, F>(timeout: Duration, request: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, etcd_client::Error>>,
{
    match tokio::time::timeout(timeout, request).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout(timeout)),
    }
}

#[async_trait]
impl KeyStore for EtcdStore {
    type Error = StoreError;

    async fn fetch_prefix(
        &mut self,
        prefix: &[u8],
        timeout: Duration,
    ) -> Result<Vec<KeyRecord>, StoreError> {
        // with_prefix on an empty key selects the whole keyspace
        let options = GetOptions::new().with_prefix();
        let response = bounded(timeout, self.client.get(prefix.to_vec(), Some(options))).await?;

        let records: Vec<KeyRecord> = response
            .kvs()
            .iter()
            .map(|kv| KeyRecord::new(kv.key(), kv.value()))
            .collect();

        tracing::debug!("Fetched {} keys under prefix {}", records.len(), quote_bytes(prefix));
        Ok(records)
    }

    async fn delete_key(&mut self, key: &[u8], timeout: Duration) -> Result<(), StoreError> {
        let response = bounded(timeout, self.client.delete(key.to_vec(), None)).await?;

        if response.deleted() == 0 {
            return Err(StoreError::NotFound(quote_bytes(key)));
        }
        Ok(())
    }
}
