//! Secure transport material for etcd connections

use crate::StoreError;
use etcd_client::{Certificate, Identity, TlsOptions};
use std::fs;
use std::path::Path;

/// CA bundle and optional client identity, read and checked up front
///
/// Accepted combinations:
/// - nothing: plaintext connection (`load` returns `None`)
/// - CA only: server-verified TLS
/// - CA, certificate and key: mutual TLS
///
/// Anything else is a configuration error.
#[derive(Debug, Clone)]
pub struct TransportCredentials {
    ca_pem: Vec<u8>,
    identity: Option<(Vec<u8>, Vec<u8>)>,
}

impl TransportCredentials {
    /// Load credentials from the given paths
    pub fn load(
        cacert: Option<&Path>,
        cert: Option<&Path>,
        key: Option<&Path>,
    ) -> Result<Option<Self>, StoreError> {
        match (cacert, cert, key) {
            (None, None, None) => Ok(None),
            (Some(ca), None, None) => Ok(Some(Self {
                ca_pem: read_pem(ca, "CERTIFICATE")?,
                identity: None,
            })),
            (Some(ca), Some(cert), Some(key)) => Ok(Some(Self {
                ca_pem: read_pem(ca, "CERTIFICATE")?,
                identity: Some((read_pem(cert, "CERTIFICATE")?, read_pem(key, "PRIVATE KEY")?)),
            })),
            (_, Some(_), None) => Err(StoreError::Tls(
                "client certificate given without a private key".to_string(),
            )),
            (_, None, Some(_)) => Err(StoreError::Tls(
                "private key given without a client certificate".to_string(),
            )),
            (None, Some(_), Some(_)) => Err(StoreError::Tls(
                "client certificate and key require a CA bundle".to_string(),
            )),
        }
    }

    /// Whether a client identity (mutual TLS) is configured
    pub fn is_mutual(&self) -> bool {
        self.identity.is_some()
    }

    /// Build the etcd client TLS options
    pub(crate) fn tls_options(&self) -> TlsOptions {
        let options = TlsOptions::new().ca_certificate(Certificate::from_pem(&self.ca_pem));
        match &self.identity {
            Some((cert, key)) => options.identity(Identity::from_pem(cert, key)),
            None => options,
        }
    }
}

/// Read a PEM file and require at least one well-formed block whose label ends
/// with `label`
fn read_pem(path: &Path, label: &str) -> Result<Vec<u8>, StoreError> {
    let data = fs::read(path)
        .map_err(|e| StoreError::Tls(format!("read {} failed: {}", path.display(), e)))?;

    let text = String::from_utf8_lossy(&data);
    let mut lines = text.lines().map(str::trim);
    let mut found_block = false;

    while let Some(line) = lines.next() {
        let Some(found) = line
            .strip_prefix("-----BEGIN ")
            .and_then(|rest| rest.strip_suffix("-----"))
        else {
            continue;
        };
        if !found.ends_with(label) {
            continue;
        }
        found_block = true;

        let end = format!("-----END {}-----", found);
        let mut body = String::new();
        let mut closed = false;
        for line in lines.by_ref() {
            if line == end {
                closed = true;
                break;
            }
            // Encapsulated headers such as Proc-Type carry no payload
            if !line.contains(':') {
                body.push_str(line);
            }
        }

        if closed && is_base64(&body) {
            return Ok(data);
        }
    }

    let problem = if found_block { "malformed" } else { "no" };
    Err(StoreError::Tls(format!(
        "{} has {} PEM {} block",
        path.display(),
        problem,
        label
    )))
}

/// Non-empty, padded standard base64
fn is_base64(body: &str) -> bool {
    let payload = body.trim_end_matches('=');
    !payload.is_empty()
        && body.len() % 4 == 0
        && body.len() - payload.len() <= 2
        && payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pem_file(label: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "-----BEGIN {}-----", label).unwrap();
        writeln!(file, "MIIBszCCAVmgAwIBAgIUQ2l0ZXN0").unwrap();
        writeln!(file, "-----END {}-----", label).unwrap();
        file
    }

    #[test]
    fn test_no_material_means_plaintext() {
        assert!(TransportCredentials::load(None, None, None).unwrap().is_none());
    }

    #[test]
    fn test_ca_only() {
        let ca = pem_file("CERTIFICATE");
        let creds = TransportCredentials::load(Some(ca.path()), None, None)
            .unwrap()
            .unwrap();
        assert!(!creds.is_mutual());
    }

    #[test]
    fn test_mutual_tls() {
        let ca = pem_file("CERTIFICATE");
        let cert = pem_file("CERTIFICATE");
        let key = pem_file("EC PRIVATE KEY");
        let creds = TransportCredentials::load(Some(ca.path()), Some(cert.path()), Some(key.path()))
            .unwrap()
            .unwrap();
        assert!(creds.is_mutual());
    }

    #[test]
    fn test_cert_without_key_rejected() {
        let ca = pem_file("CERTIFICATE");
        let cert = pem_file("CERTIFICATE");
        let result = TransportCredentials::load(Some(ca.path()), Some(cert.path()), None);
        assert!(matches!(result, Err(StoreError::Tls(_))));
    }

    #[test]
    fn test_identity_without_ca_rejected() {
        let cert = pem_file("CERTIFICATE");
        let key = pem_file("PRIVATE KEY");
        let result = TransportCredentials::load(None, Some(cert.path()), Some(key.path()));
        assert!(matches!(result, Err(StoreError::Tls(_))));
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = TransportCredentials::load(Some(Path::new("/nonexistent/ca.crt")), None, None);
        assert!(matches!(result, Err(StoreError::Tls(msg)) if msg.contains("read")));
    }

    #[test]
    fn test_key_in_place_of_ca_rejected() {
        let key = pem_file("PRIVATE KEY");
        let result = TransportCredentials::load(Some(key.path()), None, None);
        assert!(matches!(result, Err(StoreError::Tls(msg)) if msg.contains("no PEM CERTIFICATE")));
    }

    #[test]
    fn test_garbage_body_rejected() {
        let mut ca = NamedTempFile::new().unwrap();
        writeln!(ca, "-----BEGIN CERTIFICATE-----").unwrap();
        writeln!(ca, "this is not base64 at all!").unwrap();
        writeln!(ca, "-----END CERTIFICATE-----").unwrap();

        let result = TransportCredentials::load(Some(ca.path()), None, None);
        assert!(matches!(result, Err(StoreError::Tls(msg)) if msg.contains("malformed")));
    }

    #[test]
    fn test_unterminated_block_rejected() {
        let mut ca = NamedTempFile::new().unwrap();
        writeln!(ca, "-----BEGIN CERTIFICATE-----").unwrap();
        writeln!(ca, "MIIBszCCAVmgAwIBAgIUQ2l0ZXN0").unwrap();

        let result = TransportCredentials::load(Some(ca.path()), None, None);
        assert!(matches!(result, Err(StoreError::Tls(msg)) if msg.contains("malformed")));
    }

    #[test]
    fn test_bundle_with_several_blocks() {
        let mut ca = NamedTempFile::new().unwrap();
        for _ in 0..2 {
            writeln!(ca, "-----BEGIN CERTIFICATE-----").unwrap();
            writeln!(ca, "MIIBszCCAVmgAwIBAgIUQ2l0ZXN0").unwrap();
            writeln!(ca, "AAE=").unwrap();
            writeln!(ca, "-----END CERTIFICATE-----").unwrap();
        }

        assert!(TransportCredentials::load(Some(ca.path()), None, None)
            .unwrap()
            .is_some());
    }
}
