//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use keyjanitor_janitor::{ScanEvent, ScanReporter, ScanSummary, SummaryLine};

/// Output formatter.
///
/// Also the sink for scan events: each event is printed to stdout as it happens.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single scan event.
    pub fn format_event(&self, event: &ScanEvent) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(event)?),
            OutputFormat::Text => Ok(self.format_event_text(event)),
        }
    }

    fn format_event_text(&self, event: &ScanEvent) -> String {
        match event {
            ScanEvent::BinaryKey { hex, raw, value } => format!(
                "{}: hex={}, raw={}, value={}",
                self.colorize("BINARY KEY", "green"),
                hex,
                raw,
                value
            ),
            ScanEvent::WouldDelete { raw } => format!("Delete key: {} (dry-run)", raw),
            ScanEvent::Deleted { raw } => {
                format!("{}: {}", self.colorize("Deleted key", "red"), raw)
            }
            ScanEvent::DeleteFailed { raw, error } => {
                format!("Failed to delete key: {}, error: {}", raw, error)
            }
            ScanEvent::TextKey { raw, value } => format!(
                "{}: {}, value={}",
                self.colorize("UTF8 KEY", "blue"),
                raw,
                value
            ),
            ScanEvent::Notice { message } => self.colorize(message, "yellow"),
        }
    }

    /// Format the final summary.
    pub fn format_summary(&self, summary: &ScanSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&summary.to_json())?),
            OutputFormat::Text => Ok(self.format_summary_text(summary)),
        }
    }

    fn format_summary_text(&self, summary: &ScanSummary) -> String {
        let mut out = Vec::new();
        for line in summary.lines() {
            if line.starts_block() {
                out.push(String::new());
            }
            let label = match line {
                SummaryLine::Heading => self.colorize(line.label(), "bold"),
                SummaryLine::BinaryKeys(_) => self.colorize(line.label(), "green"),
                SummaryLine::TextKeys(_) => self.colorize(line.label(), "blue"),
                SummaryLine::WouldDelete(_) => self.colorize(line.label(), "yellow"),
                SummaryLine::Deleted(_) => self.colorize(line.label(), "red"),
                SummaryLine::Mode(_) | SummaryLine::TotalKeys(_) => line.label().to_string(),
            };
            out.push(format!("{}{}{}", line.indent(), label, line.detail()));
        }
        out.join("\n")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "bold" => text.bold().bright_white().to_string(),
            _ => text.to_string(),
        }
    }
}

impl ScanReporter for Formatter {
    fn emit(&mut self, event: ScanEvent) {
        match self.format_event(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("Failed to format event {:?}: {}", event, e),
        }
    }
}
