//! Core Janitor implementation: scan, classify and remediate

use crate::{JanitorConfig, JanitorError, ScanEvent, ScanMetrics, ScanReporter};
use keyjanitor_domain::{
    classify, decide, preview_raw, preview_text, quote_bytes, Action, Classification, KeyRecord,
    KeyStore, Mode,
};

/// Janitor service for binary key detection and cleanup
///
/// Responsible for:
/// - Fetching the key snapshot under a prefix
/// - Classifying every key as binary or text
/// - Reporting, simulating or performing deletion per the run's mode
/// - Counting what happened
///
/// # Examples
///
/// ```no_run
/// use keyjanitor_janitor::{Janitor, JanitorConfig, ScanEvent};
/// use keyjanitor_store::MemoryStore;
///
/// # async fn example() -> Result<(), keyjanitor_janitor::JanitorError> {
/// let mut store = MemoryStore::new();
/// store.insert(vec![0xFFu8, 0xFE], "abc");
///
/// let janitor = Janitor::new(JanitorConfig::default());
/// let mut events: Vec<ScanEvent> = Vec::new();
/// let metrics = janitor.scan(b"", &mut store, &mut events).await?;
/// assert_eq!(metrics.binary, 1);
/// # Ok(())
/// # }
/// ```
pub struct Janitor {
    config: JanitorConfig,
    mode: Mode,
}

impl Janitor {
    /// Create a new Janitor; the mode is resolved once here
    pub fn new(config: JanitorConfig) -> Self {
        let mode = config.mode();
        Self { config, mode }
    }

    /// Create a Janitor with default configuration (report only)
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Effective mode for this Janitor's runs
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &JanitorConfig {
        &self.config
    }

    /// Fetch every key under `prefix` and sweep the snapshot
    ///
    /// A failed fetch aborts the run before any key is classified.
    pub async fn scan<S, R>(
        &self,
        prefix: &[u8],
        store: &mut S,
        reporter: &mut R,
    ) -> Result<ScanMetrics, JanitorError>
    where
        S: KeyStore,
        R: ScanReporter + ?Sized,
    {
        let records = store
            .fetch_prefix(prefix, self.config.timeout)
            .await
            .map_err(|e| JanitorError::Store(format!("failed to get keys: {}", e)))?;

        Ok(self.sweep(&records, store, reporter).await)
    }

    /// Process a snapshot of records once, in the order given
    ///
    /// Delete failures are reported and skipped; they never abort the sweep.
    pub async fn sweep<S, R>(
        &self,
        records: &[KeyRecord],
        store: &mut S,
        reporter: &mut R,
    ) -> ScanMetrics
    where
        S: KeyStore,
        R: ScanReporter + ?Sized,
    {
        let mut metrics = ScanMetrics::new();

        tracing::info!("Sweeping {} keys (mode: {})", records.len(), self.mode);

        for record in records {
            let classification = classify(record.key());
            metrics.record_key(classification);

            if classification == Classification::Text {
                if self.config.verbose_text {
                    reporter.emit(ScanEvent::TextKey {
                        raw: quote_bytes(record.key()),
                        value: preview_text(record.value()),
                    });
                }
                continue;
            }

            reporter.emit(ScanEvent::BinaryKey {
                hex: hex::encode(record.key()),
                raw: quote_bytes(record.key()),
                value: preview_raw(record.value()),
            });

            let action = decide(self.mode, classification);
            tracing::debug!("Binary key {}: {:?}", hex::encode(record.key()), action);

            match action {
                Action::Skip | Action::ReportOnly => {}
                Action::SimulateDelete => {
                    reporter.emit(ScanEvent::WouldDelete {
                        raw: quote_bytes(record.key()),
                    });
                    metrics.record_dry_run_mark();
                }
                Action::Delete => self.delete(record, store, reporter, &mut metrics).await,
            }
        }

        tracing::info!(
            "Sweep completed: {} binary, {} text, {} marked, {} deleted",
            metrics.binary,
            metrics.text,
            metrics.dry_run_marked,
            metrics.deleted
        );
        debug_assert!(metrics.is_consistent());

        metrics
    }

    /// Delete one key, converting failure into an event
    async fn delete<S, R>(
        &self,
        record: &KeyRecord,
        store: &mut S,
        reporter: &mut R,
        metrics: &mut ScanMetrics,
    ) where
        S: KeyStore,
        R: ScanReporter + ?Sized,
    {
        let raw = quote_bytes(record.key());

        match store.delete_key(record.key(), self.config.timeout).await {
            Ok(()) => {
                metrics.record_deletion();
                reporter.emit(ScanEvent::Deleted { raw });
            }
            Err(e) => {
                tracing::warn!("Failed to delete key {}: {}", hex::encode(record.key()), e);
                reporter.emit(ScanEvent::DeleteFailed {
                    raw,
                    error: e.to_string(),
                });
            }
        }
    }
}
