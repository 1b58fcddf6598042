//! `relayto run` — start the relay server.
//!
//! Builds the forwarder for the selected sink once, then serves
//! `POST /` and `GET /health` until SIGTERM or Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::error::RelayError;
use crate::logging;
use crate::server::{self, AppState};
use crate::sinks;

pub async fn execute(args: RunArgs) -> Result<(), RelayError> {
    logging::init_from_args(&args.logging, logging::LogTarget::Stdout);

    let config = args.sink.to_config()?;
    let sink = config.name();

    #[cfg(feature = "sentry-integration")]
    let _sentry_guard = args.sentry_dsn.as_ref().map(|dsn| {
        crate::sentry_integration::init(dsn, args.sentry_environment.as_deref(), sink)
    });

    tracing::debug!(config = ?config, "sink configured");
    let forwarder = sinks::build(config, &server::build_http_client());
    let state = Arc::new(AppState::new(forwarder));

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, sink, "relayto started");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("relayto stopped");
    Ok(())
}
