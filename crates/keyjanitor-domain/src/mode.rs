//! Remediation mode and per-key policy

use crate::Classification;
use std::fmt;

/// Remediation mode for a whole run
///
/// Exactly one mode is active per run. It is resolved once from the requested
/// flags before any key is processed and never changes mid-scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Report binary keys, touch nothing
    #[default]
    ReportOnly,

    /// Report binary keys and what would be deleted, touch nothing
    DryRun,

    /// Report binary keys and delete them
    Delete,
}

/// Outcome of resolving the requested flags into a [`Mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeResolution {
    /// The effective mode for the run
    pub mode: Mode,

    /// True when delete was requested but dry-run took precedence
    pub overridden: bool,
}

impl Mode {
    /// Resolve the effective mode from the requested flags
    ///
    /// Dry-run always wins over delete.
    pub fn resolve(dry_run_requested: bool, delete_requested: bool) -> ModeResolution {
        let mode = if dry_run_requested {
            Mode::DryRun
        } else if delete_requested {
            Mode::Delete
        } else {
            Mode::ReportOnly
        };

        ModeResolution {
            mode,
            overridden: dry_run_requested && delete_requested,
        }
    }

    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ReportOnly => "report-only",
            Mode::DryRun => "dry-run",
            Mode::Delete => "delete",
        }
    }

    /// Parse a mode from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "report-only" | "report" => Some(Mode::ReportOnly),
            "dry-run" | "dry" => Some(Mode::DryRun),
            "delete" => Some(Mode::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid mode: {}", s))
    }
}

/// Per-key remediation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Nothing to remediate (text key)
    Skip,

    /// Binary key, report it only
    ReportOnly,

    /// Binary key, announce the deletion without performing it
    SimulateDelete,

    /// Binary key, delete it from the store
    Delete,
}

/// Decide the action for a key given the run's mode
pub fn decide(mode: Mode, classification: Classification) -> Action {
    match (classification, mode) {
        (Classification::Text, _) => Action::Skip,
        (Classification::Binary, Mode::ReportOnly) => Action::ReportOnly,
        (Classification::Binary, Mode::DryRun) => Action::SimulateDelete,
        (Classification::Binary, Mode::Delete) => Action::Delete,
    }
}
