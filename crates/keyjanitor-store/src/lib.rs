//! Keyjanitor Storage Layer
//!
//! Implements the `KeyStore` trait for etcd and for an in-memory map, and loads
//! the TLS material used to reach a secured etcd cluster.
//!
//! # Architecture
//!
//! - [`EtcdStore`]: etcd v3 client, one range request per scan, one delete per key
//! - [`MemoryStore`]: ordered in-memory store with injectable delete failures
//! - [`TransportCredentials`]: CA bundle and optional client identity
//!
//! # Examples
//!
//! ```no_run
//! use keyjanitor_store::{EtcdStore, TransportCredentials};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), keyjanitor_store::StoreError> {
//! let credentials = TransportCredentials::load(
//!     Some(Path::new("/etc/etcd/ca.crt")),
//!     Some(Path::new("/etc/etcd/client.crt")),
//!     Some(Path::new("/etc/etcd/client.key")),
//! )?;
//! let _store = EtcdStore::connect(&["https://127.0.0.1:2379".to_string()], credentials, Duration::from_secs(5)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod etcd;
mod memory;
mod tls;

pub use etcd::EtcdStore;
pub use memory::MemoryStore;
pub use tls::TransportCredentials;

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not establish a client connection
    #[error("Connection error: {0}")]
    Connect(String),

    /// etcd rejected or failed a request
    #[error("etcd error: {0}")]
    Etcd(#[from] etcd_client::Error),

    /// The per-call deadline elapsed
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// TLS material missing, unreadable or malformed
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// Key did not exist
    #[error("Key not found: {0}")]
    NotFound(String),
}
