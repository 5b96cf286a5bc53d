//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::KeyRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for reading and deleting keys in a key-value store
///
/// Implemented by the infrastructure layer (keyjanitor-store). Keys are raw
/// bytes and must not be assumed to be valid text. Every call carries its own
/// deadline; an elapsed deadline is an error for that call only.
#[async_trait]
pub trait KeyStore: Send {
    /// Error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Retrieve every key/value pair whose key starts with `prefix`
    ///
    /// An empty prefix matches all keys. Records come back in the store's
    /// natural key order.
    async fn fetch_prefix(
        &mut self,
        prefix: &[u8],
        timeout: Duration,
    ) -> Result<Vec<KeyRecord>, Self::Error>;

    /// Delete a single key
    async fn delete_key(&mut self, key: &[u8], timeout: Duration) -> Result<(), Self::Error>;
}
