//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload containing the server
//! version, uptime, the configured sink, and cumulative relay counters.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sink: String,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub entries_relayed: u64,
    pub entries_failed: u64,
    pub decode_failures: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        sink: state.forwarder.name().to_string(),
        stats: StatsResponse {
            entries_relayed: state.stats.relayed.load(Ordering::Relaxed),
            entries_failed: state.stats.failed.load(Ordering::Relaxed),
            decode_failures: state.stats.decode_failures.load(Ordering::Relaxed),
        },
    })
}
