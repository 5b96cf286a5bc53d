//! Text validity classifier
//!
//! A key is `Binary` when either rule fires:
//! - **Rule A**: it holds a byte outside printable ASCII `[0x20, 0x7E]` other
//!   than `\t`, `\n` or `\r`
//! - **Rule B**: it is not valid UTF-8
//!
//! The rules are evaluated independently and OR'd. Rule A already rejects every
//! non-ASCII byte, so Rule B never changes the outcome on its own.

/// Classification of a key's bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Contains unprintable bytes or fails UTF-8 decoding
    Binary,

    /// Printable ASCII (plus tab, newline, carriage return) and valid UTF-8
    Text,
}

impl Classification {
    /// Classify a byte sequence
    ///
    /// Total and side-effect free. The empty sequence is `Text`.
    pub fn of(bytes: &[u8]) -> Self {
        if has_unprintable_bytes(bytes) || std::str::from_utf8(bytes).is_err() {
            Classification::Binary
        } else {
            Classification::Text
        }
    }

    /// Whether this is the `Binary` classification
    pub fn is_binary(&self) -> bool {
        matches!(self, Classification::Binary)
    }
}

/// Classify a key (see [`Classification::of`])
pub fn classify(key: &[u8]) -> Classification {
    Classification::of(key)
}

/// Rule A: true if any byte falls outside printable ASCII and is not `\t`, `\n` or `\r`
pub fn has_unprintable_bytes(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|&b| !(0x20..=0x7E).contains(&b) && !matches!(b, b'\n' | b'\r' | b'\t'))
}
