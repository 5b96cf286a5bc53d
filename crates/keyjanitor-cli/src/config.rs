//! Configuration management for the CLI.
//!
//! Settings come from, highest precedence first: command-line flags,
//! `ETCDCTL_*` environment variables, the TOML config file, built-in defaults.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use keyjanitor_janitor::{JanitorConfig, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// etcd endpoints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,

    /// Path to trusted CA file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cacert: Option<PathBuf>,

    /// Path to client certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<PathBuf>,

    /// Path to client private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<PathBuf>,

    /// Request timeout (humantime string, e.g. "5s")
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON lines
    Json,
}

impl FileConfig {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".keyjanitor").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is only read when present;
    /// otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

/// Fully resolved settings for a scan.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// etcd endpoints (never empty)
    pub endpoints: Vec<String>,

    /// Path to trusted CA file
    pub cacert: Option<PathBuf>,

    /// Path to client certificate
    pub cert: Option<PathBuf>,

    /// Path to client private key
    pub key: Option<PathBuf>,

    /// Decoded key prefix (empty matches every key)
    pub prefix: Vec<u8>,

    /// Engine configuration
    pub janitor: JanitorConfig,

    /// Output format
    pub format: OutputFormat,

    /// Enable colored output
    pub color: bool,
}

impl ScanSettings {
    /// Merge flags/environment over the config file and validate.
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let endpoints = match cli.endpoints.as_deref() {
            Some(list) => split_endpoints(list),
            None => Vec::new(),
        };
        let endpoints = if endpoints.is_empty() {
            file.endpoints
                .iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect()
        } else {
            endpoints
        };
        if endpoints.is_empty() {
            return Err(CliError::Config(
                "Missing etcd endpoints (--endpoints or $ETCDCTL_ENDPOINTS)".to_string(),
            ));
        }

        let prefix = decode_prefix(&cli.prefix)?;

        let janitor = JanitorConfig {
            dry_run: cli.dry,
            remove: cli.remove,
            verbose_text: cli.debug,
            timeout: cli.timeout.or(file.timeout).unwrap_or(DEFAULT_TIMEOUT),
        };

        Ok(Self {
            endpoints,
            cacert: non_empty(cli.cacert.as_ref()).or_else(|| file.cacert.clone()),
            cert: non_empty(cli.cert.as_ref()).or_else(|| file.cert.clone()),
            key: non_empty(cli.key.as_ref()).or_else(|| file.key.clone()),
            prefix,
            janitor,
            format: cli.format.map(Into::into).unwrap_or(file.settings.format),
            color: !cli.no_color && file.settings.color,
        })
    }
}

/// Split a comma-separated endpoint list, dropping blanks.
fn split_endpoints(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a hex prefix; the empty string is the empty prefix.
fn decode_prefix(hex_prefix: &str) -> Result<Vec<u8>> {
    let trimmed = hex_prefix.trim();
    hex::decode(trimmed).map_err(|e| {
        CliError::InvalidInput(format!("Failed to decode hex prefix {:?}: {}", trimmed, e))
    })
}

/// Treat an empty path (e.g. `ETCDCTL_CACERT=`) as unset.
fn non_empty(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}
