//! Integration tests for keyjanitor-store
//!
//! These tests exercise the in-memory store through the `KeyStore` trait, the
//! way the janitor drives it.

use keyjanitor_domain::{classify, Classification, KeyStore};
use keyjanitor_store::{MemoryStore, StoreError};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(1);

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert("/app/config", "{}");
    store.insert("/app/\x00corrupt", "junk");
    store.insert(vec![b'/', b'a', b'p', b'p', b'/', 0xC3, 0x28], vec![0x00u8, 0x01]);
    store.insert("/other/key", "value");
    store
}

#[tokio::test]
async fn test_prefix_scan_then_delete_binary_keys() {
    let mut store = seeded_store();

    let records = store.fetch_prefix(b"/app/", TIMEOUT).await.unwrap();
    assert_eq!(records.len(), 3);

    let binary: Vec<Vec<u8>> = records
        .iter()
        .filter(|r| classify(r.key()) == Classification::Binary)
        .map(|r| r.key().to_vec())
        .collect();
    assert_eq!(binary.len(), 2);

    for key in &binary {
        store.delete_key(key, TIMEOUT).await.unwrap();
    }

    assert_eq!(store.len(), 2);
    assert!(store.contains(b"/app/config"));
    assert!(store.contains(b"/other/key"));
}

#[tokio::test]
async fn test_second_delete_of_same_key_fails() {
    let mut store = seeded_store();

    store.delete_key(b"/app/config", TIMEOUT).await.unwrap();
    let again = store.delete_key(b"/app/config", TIMEOUT).await;

    assert!(matches!(again, Err(StoreError::NotFound(key)) if key == "\"/app/config\""));
}

#[tokio::test]
async fn test_prefix_with_no_matches() {
    let mut store = seeded_store();
    let records = store.fetch_prefix(b"/missing/", TIMEOUT).await.unwrap();
    assert!(records.is_empty());
}
