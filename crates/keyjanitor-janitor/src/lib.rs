//! Keyjanitor Janitor
//!
//! Scan-classify-remediate engine for binary keys in a key-value store.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Scanning**: Fetching one snapshot of keys under a prefix
//! - **Classification**: Deciding whether each key is binary or valid text
//! - **Remediation**: Reporting, simulating or performing deletion of binary keys
//! - **Accounting**: Counting keys per outcome and rendering a summary
//!
//! ## Modes
//!
//! | Mode | Binary key | Store mutated |
//! |------|------------|---------------|
//! | **report-only** | Reported | No |
//! | **dry-run** | Reported, "would delete" announced | No |
//! | **delete** | Reported, then deleted | Yes |
//!
//! Dry-run always wins when both dry-run and delete are requested.
//!
//! # Usage
//!
//! ```no_run
//! use keyjanitor_janitor::{Janitor, JanitorConfig, ScanEvent, ScanSummary};
//! use keyjanitor_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = MemoryStore::new();
//! let config = JanitorConfig { dry_run: true, ..Default::default() };
//! let janitor = Janitor::new(config);
//!
//! let mut events: Vec<ScanEvent> = Vec::new();
//! let metrics = janitor.scan(b"/registry/", &mut store, &mut events).await?;
//! println!("{}", ScanSummary::new(janitor.mode(), metrics).render());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! dry_run = false
//! remove = true
//! verbose_text = false
//! timeout = "5s"
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod events;
mod janitor;
mod metrics;
mod summary;

pub use config::{JanitorConfig, DEFAULT_TIMEOUT};
pub use error::JanitorError;
pub use events::{ScanEvent, ScanReporter};
pub use janitor::Janitor;
pub use metrics::ScanMetrics;
pub use summary::{ScanSummary, SummaryLine};
