//! Optional Sentry error tracking integration.
//!
//! Initializes the Sentry SDK with the provided DSN and environment and
//! tags every event with the configured sink. Forwarding failures are
//! logged at error level, so the `sentry-tracing` layer installed by
//! [`logging`](crate::logging) turns each one into a Sentry event. The
//! returned guard must be held for the lifetime of the process.

pub fn init(dsn: &str, environment: Option<&str>, sink: &'static str) -> sentry::ClientInitGuard {
    let parsed_dsn = match dsn.parse() {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(error = %e, "invalid Sentry DSN, error tracking disabled");
            None
        }
    };

    let guard = sentry::init(sentry::ClientOptions {
        dsn: parsed_dsn,
        environment: environment.map(|e| e.to_string().into()),
        release: Some(env!("CARGO_PKG_VERSION").into()),
        ..Default::default()
    });

    sentry::configure_scope(|scope| scope.set_tag("sink", sink));

    guard
}
