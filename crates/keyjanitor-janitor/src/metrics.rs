//! Counters accumulated during a scan

use keyjanitor_domain::{Classification, Mode};
use serde::Serialize;

/// Counters for a single scan
///
/// Created zeroed at the start of a run and only ever incremented. Finalized
/// when the engine has consumed every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanMetrics {
    /// Keys examined
    pub total: usize,

    /// Keys classified as binary
    pub binary: usize,

    /// Keys classified as text
    pub text: usize,

    /// Binary keys announced for deletion in dry-run mode
    pub dry_run_marked: usize,

    /// Binary keys actually deleted
    pub deleted: usize,
}

impl ScanMetrics {
    /// Create new zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one examined key
    pub fn record_key(&mut self, classification: Classification) {
        self.total += 1;
        match classification {
            Classification::Binary => self.binary += 1,
            Classification::Text => self.text += 1,
        }
    }

    /// Record a simulated deletion
    pub fn record_dry_run_mark(&mut self) {
        self.dry_run_marked += 1;
    }

    /// Record a successful deletion
    pub fn record_deletion(&mut self) {
        self.deleted += 1;
    }

    /// Binary keys that delete mode failed to remove
    pub fn failed_deletes(&self, mode: Mode) -> usize {
        match mode {
            Mode::Delete => self.binary.saturating_sub(self.deleted),
            Mode::ReportOnly | Mode::DryRun => 0,
        }
    }

    /// Check the accounting invariants
    ///
    /// `binary + text == total`, neither remediation counter exceeds `binary`,
    /// and at most one remediation counter is nonzero.
    pub fn is_consistent(&self) -> bool {
        self.binary + self.text == self.total
            && self.deleted <= self.binary
            && self.dry_run_marked <= self.binary
            && (self.deleted == 0 || self.dry_run_marked == 0)
    }
}
