//! The relay handler: decode → forward → envelope.
//!
//! [`relay_handler`] is mounted on `POST /`. It reads the raw body, hands
//! it to [`process`] together with the configured
//! [`Forwarder`](crate::sinks::Forwarder), and always answers HTTP 200
//! with an [`EntryResult`]. Failure is signalled only through `ok`.

pub mod entry;

pub use entry::{Entry, EntryResult, DECODE_FAILED, FORWARD_FAILED, SUCCESSFUL};

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::RelayError;
use crate::server::{AppState, Stats};
use crate::sinks::Forwarder;

/// Outcome of a single relay pass, kept for counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Relayed,
    DecodeFailed,
    ForwardFailed,
}

impl Outcome {
    pub fn record(self, stats: &Stats) {
        let counter = match self {
            Self::Relayed => &stats.relayed,
            Self::DecodeFailed => &stats.decode_failures,
            Self::ForwardFailed => &stats.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Run one entry through the forwarder. Produces exactly one envelope.
pub async fn process(
    forwarder: &dyn Forwarder,
    body: &[u8],
    correlation_id: &str,
) -> (EntryResult, Outcome) {
    let entry: Entry = match serde_json::from_slice(body) {
        Ok(entry) => entry,
        Err(e) => {
            let err = RelayError::from(e);
            tracing::warn!(correlation_id, error = %err, "failed to decode body");
            return (EntryResult::failure(DECODE_FAILED), Outcome::DecodeFailed);
        }
    };

    tracing::info!(
        correlation_id,
        sink = forwarder.name(),
        content = %entry.content,
        timestamp = entry.timestamp,
        "entry received"
    );

    match forwarder.send(&entry).await {
        Ok(marker) => {
            tracing::info!(
                correlation_id,
                sink = forwarder.name(),
                result = %marker,
                "entry relayed"
            );
            (EntryResult::success(marker), Outcome::Relayed)
        }
        Err(e) => {
            tracing::error!(
                correlation_id,
                sink = forwarder.name(),
                error = %e,
                "failed to forward entry"
            );
            (EntryResult::failure(FORWARD_FAILED), Outcome::ForwardFailed)
        }
    }
}

pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    req_headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let correlation_id = req_headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    // An unreadable or oversized body still gets the envelope, not axum's 4xx.
    let (result, outcome) = match body {
        Ok(body) => process(state.forwarder.as_ref(), &body, &correlation_id).await,
        Err(rejection) => {
            tracing::warn!(
                correlation_id = %correlation_id,
                status = rejection.status().as_u16(),
                error = %rejection.body_text(),
                "failed to read body"
            );
            (EntryResult::failure(DECODE_FAILED), Outcome::DecodeFailed)
        }
    };
    outcome.record(&state.stats);

    let mut response = Json(result).into_response();
    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response.headers_mut().insert("x-correlation-id", value);
    }
    response
}
