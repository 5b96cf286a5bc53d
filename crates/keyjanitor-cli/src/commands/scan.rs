//! Scan command implementation.

use crate::config::ScanSettings;
use crate::error::Result;
use crate::output::Formatter;
use keyjanitor_domain::KeyStore;
use keyjanitor_janitor::{Janitor, ScanEvent, ScanReporter, ScanSummary};
use keyjanitor_store::{EtcdStore, TransportCredentials};

/// Advisory emitted when both --dry and --remove are given.
pub const DRY_OVERRIDES_REMOVE: &str = "Note: --dry overrides --remove; performing dry-run only";

/// Execute the scan command against etcd.
///
/// TLS material and the connection are set up before anything is fetched;
/// failures there are fatal.
pub async fn execute_scan(settings: ScanSettings, formatter: &mut Formatter) -> Result<ScanSummary> {
    let credentials = TransportCredentials::load(
        settings.cacert.as_deref(),
        settings.cert.as_deref(),
        settings.key.as_deref(),
    )?;

    let mut store =
        EtcdStore::connect(&settings.endpoints, credentials, settings.janitor.timeout).await?;

    let summary = run_scan(&settings, &mut store, &mut *formatter).await?;
    println!("{}", formatter.format_summary(&summary)?);

    Ok(summary)
}

/// Run a scan against any store, emitting every operator line to `reporter`.
pub async fn run_scan<S, R>(
    settings: &ScanSettings,
    store: &mut S,
    reporter: &mut R,
) -> Result<ScanSummary>
where
    S: KeyStore,
    R: ScanReporter + ?Sized,
{
    if settings.janitor.resolve_mode().overridden {
        tracing::warn!("--dry and --remove both given, running dry-run");
        reporter.emit(ScanEvent::Notice {
            message: DRY_OVERRIDES_REMOVE.to_string(),
        });
    }

    let janitor = Janitor::new(settings.janitor.clone());
    let metrics = janitor.scan(&settings.prefix, store, reporter).await?;

    Ok(ScanSummary::new(janitor.mode(), metrics))
}
