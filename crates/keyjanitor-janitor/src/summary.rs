//! Final report rendering
//!
//! The summary is a fixed sequence of lines derived only from the mode and
//! the final counters.

use crate::ScanMetrics;
use keyjanitor_domain::Mode;

/// A single line of the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine {
    /// `Mode: dry-run` / `Mode: delete` (absent in report-only)
    Mode(Mode),
    /// `SUMMARY:` heading
    Heading,
    /// Count of binary keys
    BinaryKeys(usize),
    /// Count of text keys
    TextKeys(usize),
    /// Count of all keys
    TotalKeys(usize),
    /// Keys that would be deleted (dry-run only)
    WouldDelete(usize),
    /// Keys deleted (delete only)
    Deleted(usize),
}

impl SummaryLine {
    /// Leading indentation
    pub fn indent(&self) -> &'static str {
        match self {
            SummaryLine::Mode(_) | SummaryLine::Heading => "",
            _ => "  ",
        }
    }

    /// Label part of the line (the part a formatter may style)
    pub fn label(&self) -> &'static str {
        match self {
            SummaryLine::Mode(_) => "Mode",
            SummaryLine::Heading => "SUMMARY",
            SummaryLine::BinaryKeys(_) => "Binary keys",
            SummaryLine::TextKeys(_) => "UTF-8 keys",
            SummaryLine::TotalKeys(_) => "Total keys",
            SummaryLine::WouldDelete(_) => "Dry-run",
            SummaryLine::Deleted(_) => "Deleted",
        }
    }

    /// Everything after the label
    pub fn detail(&self) -> String {
        match self {
            SummaryLine::Mode(mode) => format!(": {}", mode),
            SummaryLine::Heading => ":".to_string(),
            SummaryLine::BinaryKeys(n) => format!(":  {}", n),
            SummaryLine::TextKeys(n) => format!(":   {}", n),
            SummaryLine::TotalKeys(n) => format!(":   {}", n),
            SummaryLine::WouldDelete(n) => format!(":      {} keys would be deleted", n),
            SummaryLine::Deleted(n) => format!(":      {} keys", n),
        }
    }

    /// Whether a blank line precedes this line
    pub fn starts_block(&self) -> bool {
        matches!(self, SummaryLine::Mode(_) | SummaryLine::Heading)
    }
}

impl std::fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.indent(), self.label(), self.detail())
    }
}

/// Summary of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    mode: Mode,
    metrics: ScanMetrics,
}

impl ScanSummary {
    /// Create a summary for the given mode and final counters
    pub fn new(mode: Mode, metrics: ScanMetrics) -> Self {
        Self { mode, metrics }
    }

    /// Mode of the run
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Final counters
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    /// Lines in their fixed order
    pub fn lines(&self) -> Vec<SummaryLine> {
        let m = &self.metrics;
        let mut lines = Vec::with_capacity(7);

        if self.mode != Mode::ReportOnly {
            lines.push(SummaryLine::Mode(self.mode));
        }
        lines.push(SummaryLine::Heading);
        lines.push(SummaryLine::BinaryKeys(m.binary));
        lines.push(SummaryLine::TextKeys(m.text));
        lines.push(SummaryLine::TotalKeys(m.total));

        match self.mode {
            Mode::DryRun => lines.push(SummaryLine::WouldDelete(m.dry_run_marked)),
            Mode::Delete => lines.push(SummaryLine::Deleted(m.deleted)),
            Mode::ReportOnly => {}
        }

        lines
    }

    /// Render as plain text
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        for line in self.lines() {
            if line.starts_block() {
                out.push(String::new());
            }
            out.push(line.to_string());
        }
        out.join("\n")
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let m = &self.metrics;
        serde_json::json!({
            "mode": self.mode.as_str(),
            "binary": m.binary,
            "text": m.text,
            "total": m.total,
            "dry_run_marked": m.dry_run_marked,
            "deleted": m.deleted,
            "failed_deletes": m.failed_deletes(self.mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(binary: usize, text: usize) -> ScanMetrics {
        ScanMetrics {
            total: binary + text,
            binary,
            text,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_only_summary() {
        let summary = ScanSummary::new(Mode::ReportOnly, metrics(1, 1));
        assert_eq!(
            summary.render(),
            "\nSUMMARY:\n  Binary keys:  1\n  UTF-8 keys:   1\n  Total keys:   2"
        );
    }

    #[test]
    fn test_dry_run_summary() {
        let mut m = metrics(3, 2);
        m.dry_run_marked = 3;
        let summary = ScanSummary::new(Mode::DryRun, m);

        let lines = summary.lines();
        assert_eq!(lines.first(), Some(&SummaryLine::Mode(Mode::DryRun)));
        assert_eq!(lines.last(), Some(&SummaryLine::WouldDelete(3)));
        assert!(summary.render().contains("Mode: dry-run"));
        assert!(summary.render().ends_with("  Dry-run:      3 keys would be deleted"));
    }

    #[test]
    fn test_delete_summary() {
        let mut m = metrics(2, 0);
        m.deleted = 1;
        let summary = ScanSummary::new(Mode::Delete, m);

        let rendered = summary.render();
        assert!(rendered.starts_with("\nMode: delete\n\nSUMMARY:"));
        assert!(rendered.ends_with("  Deleted:      1 keys"));
        assert!(!rendered.contains("would be deleted"));
    }

    #[test]
    fn test_empty_scan_summary() {
        let summary = ScanSummary::new(Mode::ReportOnly, ScanMetrics::new());
        let rendered = summary.render();
        assert!(rendered.contains("Binary keys:  0"));
        assert!(rendered.contains("UTF-8 keys:   0"));
        assert!(rendered.contains("Total keys:   0"));
    }

    #[test]
    fn test_json_summary() {
        let mut m = metrics(2, 1);
        m.deleted = 1;
        let json = ScanSummary::new(Mode::Delete, m).to_json();
        assert_eq!(json["mode"], "delete");
        assert_eq!(json["total"], 3);
        assert_eq!(json["failed_deletes"], 1);
    }
}
