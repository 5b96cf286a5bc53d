//! CLI flag definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Keyjanitor - Find (and optionally delete) etcd keys that are not valid text.
#[derive(Debug, Parser)]
#[command(name = "keyjanitor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated list of etcd endpoints
    #[arg(long, env = "ETCDCTL_ENDPOINTS")]
    pub endpoints: Option<String>,

    /// Path to trusted CA file
    #[arg(long, env = "ETCDCTL_CACERT")]
    pub cacert: Option<PathBuf>,

    /// Path to client certificate
    #[arg(long, env = "ETCDCTL_CERT")]
    pub cert: Option<PathBuf>,

    /// Path to client private key
    #[arg(long, env = "ETCDCTL_KEY")]
    pub key: Option<PathBuf>,

    /// Hexadecimal prefix of keys to scan (empty scans every key)
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Request timeout (e.g. 5s, 500ms) [default: 5s]
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Print UTF-8 keys and values
    #[arg(long)]
    pub debug: bool,

    /// Delete binary keys
    #[arg(long)]
    pub remove: bool,

    /// Dry-run mode (simulates deletion, overrides --remove)
    #[arg(long)]
    pub dry: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable lines (default)
    Text,
    /// One JSON object per line
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_parsing() {
        let cli = Cli::parse_from(["keyjanitor", "--endpoints", "http://127.0.0.1:2379"]);
        assert_eq!(cli.endpoints.as_deref(), Some("http://127.0.0.1:2379"));
        assert_eq!(cli.prefix, "");
        assert!(!cli.remove);
        assert!(!cli.dry);
        assert!(!cli.debug);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "keyjanitor",
            "--endpoints",
            "https://a:2379,https://b:2379",
            "--cacert",
            "/tmp/ca.crt",
            "--cert",
            "/tmp/client.crt",
            "--key",
            "/tmp/client.key",
            "--prefix",
            "2f6170702f",
            "--timeout",
            "1500ms",
            "--debug",
            "--remove",
            "--dry",
            "--no-color",
            "--format",
            "json",
        ]);
        assert_eq!(cli.cacert, Some(PathBuf::from("/tmp/ca.crt")));
        assert_eq!(cli.key, Some(PathBuf::from("/tmp/client.key")));
        assert_eq!(cli.timeout, Some(Duration::from_millis(1500)));
        assert!(cli.debug && cli.remove && cli.dry && cli.no_color);
        assert_eq!(cli.format, Some(CliFormat::Json));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let result = Cli::try_parse_from(["keyjanitor", "--timeout", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
