//! Shared helpers: a relay server under test and a mock upstream sink.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

use relayto::server::{self, AppState};
use relayto::sinks::Forwarder;

pub async fn start_relay(forwarder: Arc<dyn Forwarder>) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    start_relay_with_limit(forwarder, 1_048_576).await
}

pub async fn start_relay_with_limit(
    forwarder: Arc<dyn Forwarder>,
    max_body: usize,
) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let state = Arc::new(AppState::new(forwarder));
    let router = server::build_router(state, max_body);
    serve(router).await
}

async fn serve(router: Router) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

#[derive(Debug, Clone)]
pub struct Captured {
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct UpstreamState {
    captured: Arc<Mutex<Vec<Captured>>>,
    status: StatusCode,
    reply: &'static str,
}

/// A fake chat/messaging API that records every request it receives.
pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
    _shutdown: tokio::sync::oneshot::Sender<()>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, reply: &'static str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            captured: Arc::clone(&captured),
            status,
            reply,
        };
        let router = Router::new().fallback(record).with_state(state);
        let (addr, shutdown) = serve(router).await;
        Self {
            addr,
            captured,
            _shutdown: shutdown,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<UpstreamState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state.captured.lock().unwrap().push(Captured { uri, headers, body });
    (
        state.status,
        [("content-type", "application/json")],
        state.reply,
    )
}
