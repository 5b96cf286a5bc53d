//! Record module - key/value pairs sourced from the store

/// A single key/value pair as retrieved from the store
///
/// Records are produced once per scan by the store and never mutated afterwards.
/// Keys are raw bytes: the whole point of the audit is that they may not be text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl KeyRecord {
    /// Create a record from owned key and value bytes
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Raw key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Raw value bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
