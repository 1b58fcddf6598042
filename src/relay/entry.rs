//! Inbound entry and the uniform response envelope.

use serde::{Deserialize, Serialize};

pub const DECODE_FAILED: &str = "Failed to decode body";
pub const FORWARD_FAILED: &str = "Failed to create entry";
pub const SUCCESSFUL: &str = "SUCCESSFUL";

/// The unit of data being relayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub content: String,
    pub timestamp: u64,
}

/// Response envelope: `result` carries the success marker or a short reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResult {
    pub ok: bool,
    pub result: String,
}

impl EntryResult {
    #[must_use]
    pub fn success(marker: impl Into<String>) -> Self {
        Self {
            ok: true,
            result: marker.into(),
        }
    }

    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: reason.into(),
        }
    }
}
