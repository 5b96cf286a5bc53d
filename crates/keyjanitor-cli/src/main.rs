//! Keyjanitor CLI - audit etcd for binary keys and optionally remove them.

use clap::Parser;
use keyjanitor_cli::commands;
use keyjanitor_cli::{Cli, FileConfig, Formatter, ScanSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> keyjanitor_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config file (optional) and merge with flags
    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = ScanSettings::resolve(&cli, &file)?;

    let mut formatter = Formatter::new(settings.format, settings.color);

    let summary = commands::execute_scan(settings, &mut formatter).await?;
    tracing::info!(
        "Scan finished: {} keys, mode {}",
        summary.metrics().total,
        summary.mode()
    );

    Ok(())
}
