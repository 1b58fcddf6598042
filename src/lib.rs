//! relayto is a stateless HTTP relay for small JSON entries.
//!
//! Each inbound `POST /` carries an entry `{"content": ..., "timestamp": ...}`.
//! The entry is handed to exactly one configured sink (a MongoDB
//! collection, a Slack channel, or a Messenger recipient) and the outcome
//! is reported back as `{"ok": ..., "result": ...}`. There is no retry, no
//! queue, and no state shared between requests beyond counters.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, send, health).
//! - [`config`] -- Explicit per-sink configuration built at start-up.
//! - [`error`] -- Unified error type using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`relay`] -- Entry model, response envelope, and the relay handler.
//! - [`server`] -- Axum server setup, shared application state, HTTP client, and
//!   graceful shutdown.
//! - [`sinks`] -- The [`Forwarder`](sinks::Forwarder) trait and one
//!   implementation per destination.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `mongodb` | Database sink _(enabled by default)_ |
//! | `sentry-integration` | Sentry error tracking |
//! | `full` | All features |

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod relay;
pub mod server;
pub mod sinks;

#[cfg(feature = "sentry-integration")]
pub mod sentry_integration;
