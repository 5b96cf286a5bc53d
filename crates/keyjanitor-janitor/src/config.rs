//! Configuration for Janitor runs
//!
//! Carries the requested remediation flags and the per-request timeout.

use keyjanitor_domain::{Mode, ModeResolution};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout (fetch and each delete)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a Janitor run
///
/// # Examples
///
/// ```
/// use keyjanitor_janitor::JanitorConfig;
/// use keyjanitor_domain::Mode;
///
/// // Default: report only
/// let config = JanitorConfig::default();
/// assert_eq!(config.mode(), Mode::ReportOnly);
///
/// // Dry-run wins over remove
/// let config = JanitorConfig { dry_run: true, remove: true, ..Default::default() };
/// assert_eq!(config.mode(), Mode::DryRun);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// Simulate deletions without touching the store
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Delete binary keys (ignored when `dry_run` is set)
    /// Default: false
    #[serde(default)]
    pub remove: bool,

    /// Also report text keys with a preview of their values
    /// Default: false
    #[serde(default)]
    pub verbose_text: bool,

    /// Deadline for the range fetch and for each delete
    /// Default: 5 seconds
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            remove: false,
            verbose_text: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl JanitorConfig {
    /// Resolve the requested flags, keeping track of whether dry-run overrode remove
    pub fn resolve_mode(&self) -> ModeResolution {
        Mode::resolve(self.dry_run, self.remove)
    }

    /// Effective mode for the run
    pub fn mode(&self) -> Mode {
        self.resolve_mode().mode
    }
}
