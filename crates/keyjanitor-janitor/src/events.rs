//! Per-key report events and the sink they are emitted to

use serde::Serialize;

/// One report line produced while scanning
///
/// Keys are carried pre-rendered (`raw` is an escaped literal, `hex` is lowercase
/// hex) so sinks never need to handle raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    /// A binary key was found
    BinaryKey {
        /// Hex encoding of the key
        hex: String,
        /// Escaped rendering of the key
        raw: String,
        /// Raw preview of the value
        value: String,
    },

    /// Dry-run: the key would have been deleted
    WouldDelete {
        /// Escaped rendering of the key
        raw: String,
    },

    /// The key was deleted
    Deleted {
        /// Escaped rendering of the key
        raw: String,
    },

    /// Deleting the key failed; the scan carried on
    DeleteFailed {
        /// Escaped rendering of the key
        raw: String,
        /// Store error message
        error: String,
    },

    /// A text key, only emitted when verbose text reporting is on
    TextKey {
        /// Escaped rendering of the key
        raw: String,
        /// Text preview of the value
        value: String,
    },

    /// Advisory message for the operator, printed before any key line
    Notice {
        /// Message text
        message: String,
    },
}

/// Sink for scan events
///
/// Implemented by the CLI's formatter. Presentation (colors, JSON) lives
/// entirely on the sink side.
pub trait ScanReporter {
    /// Emit one event
    fn emit(&mut self, event: ScanEvent);
}

impl ScanReporter for Vec<ScanEvent> {
    fn emit(&mut self, event: ScanEvent) {
        self.push(event);
    }
}

impl<R: ScanReporter + ?Sized> ScanReporter for &mut R {
    fn emit(&mut self, event: ScanEvent) {
        (**self).emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_events() {
        let mut events: Vec<ScanEvent> = Vec::new();
        events.emit(ScanEvent::WouldDelete {
            raw: "\"\\xff\"".to_string(),
        });
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_event_json_shape() {
        let event = ScanEvent::DeleteFailed {
            raw: "\"k\"".to_string(),
            error: "Key not found".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "delete_failed");
        assert_eq!(json["raw"], "\"k\"");
        assert_eq!(json["error"], "Key not found");
    }

    #[test]
    fn test_notice_json_shape() {
        let event = ScanEvent::Notice {
            message: "heads up".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "notice");
        assert_eq!(json["message"], "heads up");
    }
}
