//! Error types for Janitor operations

use thiserror::Error;

/// Errors that abort a Janitor run
///
/// Per-key delete failures are not errors at this level: they are reported as
/// events and the scan continues.
#[derive(Error, Debug)]
pub enum JanitorError {
    /// Storage layer error (initial range fetch)
    #[error("Storage error: {0}")]
    Store(String),
}
