//! Keyjanitor Domain Layer
//!
//! This crate contains the pure decision logic for auditing a key-value store
//! for keys that are not valid text. It performs no I/O and defines the trait
//! boundary the infrastructure layer implements.
//!
//! ## Key Concepts
//!
//! - **KeyRecord**: A key/value pair retrieved from the store in one snapshot
//! - **Classification**: Whether a key is `Binary` or valid `Text`
//! - **Preview**: A bounded, escaped rendering of a value for operators
//! - **Mode**: The single remediation mode of a run (report-only, dry-run, delete)
//! - **Action**: The per-key decision derived from mode and classification
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod mode;
pub mod preview;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use classify::{classify, has_unprintable_bytes, Classification};
pub use mode::{decide, Action, Mode, ModeResolution};
pub use preview::{preview_raw, preview_text, quote_bytes, NON_UTF8_SENTINEL, PREVIEW_LIMIT};
pub use record::KeyRecord;
pub use traits::KeyStore;
