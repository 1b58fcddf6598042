//! Unified error type for relayto.
//!
//! [`RelayError`] covers both process-level failures (binding the listener,
//! reading stdin, health checks) and per-request forwarding failures. The
//! request path never exposes these to the caller: they are logged and
//! collapsed into an [`EntryResult`](crate::relay::EntryResult).

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("Failed to decode entry: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode {sink} payload: {source}")]
    Encode {
        sink: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {sink} timed out after {timeout_ms}ms")]
    Timeout { sink: &'static str, timeout_ms: u64 },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("No entry provided.\n\n  {hint}")]
    MissingEntry { hint: String },

    #[error("Sink '{sink}' is not available: rebuild with the '{feature}' feature")]
    SinkUnavailable {
        sink: &'static str,
        feature: &'static str,
    },

    #[error("Entry was not relayed: {0}")]
    NotRelayed(String),

    #[error("Database error ({backend}): {source}")]
    #[cfg(feature = "mongodb")]
    Database {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RelayError {
    pub(crate) fn http(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::HttpRequest {
            source: source.into(),
        }
    }

    pub(crate) fn uri(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::UriParse {
            source: source.into(),
        }
    }
}
