//! In-memory implementation of `KeyStore`

use crate::StoreError;
use async_trait::async_trait;
use keyjanitor_domain::{quote_bytes, KeyRecord, KeyStore};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

/// Ordered in-memory key-value store
///
/// Iterates in byte order like etcd does. Deletes can be made to fail for
/// chosen keys, which lets callers exercise partial-failure paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
    failing_deletes: HashSet<Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Make every delete of `key` fail as if its deadline elapsed
    pub fn fail_delete_of(&mut self, key: impl Into<Vec<u8>>) {
        self.failing_deletes.insert(key.into());
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

#[async_trait]
impl KeyStore for MemoryStore {
    type Error = StoreError;

    async fn fetch_prefix(
        &mut self,
        prefix: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<KeyRecord>, StoreError> {
        Ok(self
            .entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| KeyRecord::new(key.clone(), value.clone()))
            .collect())
    }

    async fn delete_key(&mut self, key: &[u8], timeout: Duration) -> Result<(), StoreError> {
        if self.failing_deletes.contains(key) {
            return Err(StoreError::Timeout(timeout));
        }

        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(quote_bytes(key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn test_fetch_prefix_filters_and_orders() {
        let mut store: MemoryStore = [
            ("b/2", "two"),
            ("a/1", "one"),
            ("b/1", "one"),
            ("c", "three"),
        ]
        .into_iter()
        .collect();

        let records = store.fetch_prefix(b"b/", TIMEOUT).await.unwrap();
        let keys: Vec<&[u8]> = records.iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec![b"b/1".as_slice(), b"b/2".as_slice()]);
    }

    #[tokio::test]
    async fn test_empty_prefix_matches_everything() {
        let mut store = MemoryStore::new();
        store.insert(vec![0xFFu8, 0xFE], "abc");
        store.insert("hello", "world");

        let records = store.fetch_prefix(b"", TIMEOUT).await.unwrap();
        assert_eq!(records.len(), 2);
        // Byte order: "hello" (0x68) sorts before 0xFF
        assert_eq!(records[0].key(), b"hello");
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_not_found() {
        let mut store = MemoryStore::new();
        let result = store.delete_key(b"absent", TIMEOUT).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_injected_delete_failure() {
        let mut store = MemoryStore::new();
        store.insert("k", "v");
        store.fail_delete_of("k");

        let result = store.delete_key(b"k", TIMEOUT).await;
        assert!(matches!(result, Err(StoreError::Timeout(d)) if d == TIMEOUT));
        assert!(store.contains(b"k"));
    }
}
