//! Destination forwarders.
//!
//! Every sink implements [`Forwarder`]: turn one [`Entry`] into one
//! outbound call and report a success marker or a [`RelayError`]. The
//! sink is chosen at start-up by [`build`] and never changes for the life
//! of the process. Webhook sinks share [`post_json`], which issues a single
//! bounded POST through the pooled hyper client.

pub mod chat;
#[cfg(feature = "mongodb")]
pub mod database;
pub mod messaging;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use http_body_util::{BodyExt, Full};

use crate::config::SinkConfig;
use crate::error::RelayError;
use crate::relay::Entry;
use crate::server::HttpClient;

// async_trait is required here because the handler holds an Arc<dyn Forwarder>
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait Forwarder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Deliver one entry. Exactly one outbound attempt; no retries.
    async fn send(&self, entry: &Entry) -> Result<String, RelayError>;
}

/// Build the forwarder for the configured sink.
#[must_use]
pub fn build(config: SinkConfig, client: &HttpClient) -> Arc<dyn Forwarder> {
    match config {
        #[cfg(feature = "mongodb")]
        SinkConfig::Database(settings) => Arc::new(database::DatabaseForwarder::new(settings)),
        SinkConfig::Chat(chat) => Arc::new(chat::ChatForwarder::new(chat, client.clone())),
        SinkConfig::Messaging(messaging) => {
            Arc::new(messaging::MessagingForwarder::new(messaging, client.clone()))
        }
    }
}

#[derive(Debug)]
pub struct Delivery {
    pub status: StatusCode,
    pub body: Bytes,
}

/// POST a JSON payload and collect the response, bounded by `timeout_ms`.
pub async fn post_json(
    client: &HttpClient,
    sink: &'static str,
    uri: &str,
    bearer: Option<&str>,
    payload: Vec<u8>,
    timeout_ms: u64,
) -> Result<Delivery, RelayError> {
    let uri: hyper::Uri = uri.parse().map_err(RelayError::uri)?;

    let mut builder = hyper::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = builder
        .body(Full::new(Bytes::from(payload)))
        .map_err(RelayError::http)?;

    let timeout = Duration::from_millis(timeout_ms);
    let response = tokio::time::timeout(timeout, client.request(req))
        .await
        .map_err(|_| RelayError::Timeout { sink, timeout_ms })?
        .map_err(RelayError::http)?;

    let status = response.status();
    let body = match tokio::time::timeout(timeout, response.into_body().collect()).await {
        Ok(Ok(collected)) => collected.to_bytes(),
        Ok(Err(e)) => {
            tracing::debug!(sink, error = %e, "failed to read sink response body");
            Bytes::new()
        }
        Err(_) => {
            tracing::debug!(sink, "timed out reading sink response body");
            Bytes::new()
        }
    };

    Ok(Delivery { status, body })
}

/// Log an application-level rejection carried in the sink's response.
///
/// Delivery is still reported as successful; the caller only learns about
/// transport failures.
pub fn warn_on_rejection(sink: &'static str, delivery: &Delivery) {
    if !delivery.status.is_success() {
        tracing::warn!(
            sink,
            status = delivery.status.as_u16(),
            body = %String::from_utf8_lossy(&delivery.body),
            "sink responded with non-success status"
        );
        return;
    }

    let Ok(body) = serde_json::from_slice::<serde_json::Value>(&delivery.body) else {
        return;
    };
    if body.get("ok").and_then(serde_json::Value::as_bool) == Some(false) {
        tracing::warn!(
            sink,
            error = body.get("error").and_then(serde_json::Value::as_str).unwrap_or("unknown"),
            "sink rejected the message"
        );
    }
}
