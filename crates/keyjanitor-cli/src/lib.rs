//! Keyjanitor CLI library.
//!
//! This library provides the core functionality for the keyjanitor command-line
//! interface, including flag parsing, configuration resolution, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::{FileConfig, ScanSettings};
pub use error::{CliError, Result};
pub use output::Formatter;
