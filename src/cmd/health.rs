//! `relayto health`: query a running relay and summarize its counters.

use std::fmt::Write as _;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};

use crate::cli::HealthArgs;
use crate::error::RelayError;
use crate::health::HealthResponse;
use crate::server::build_http_client;

pub async fn execute(args: HealthArgs) -> Result<(), RelayError> {
    let body = fetch(&args.url, args.timeout).await?;

    if args.json {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    match serde_json::from_slice::<HealthResponse>(&body) {
        Ok(health) => print!("{}", summarize(&args.url, &health)),
        Err(e) => {
            eprintln!("Unexpected health payload: {e}");
            println!("{}", String::from_utf8_lossy(&body));
        }
    }
    Ok(())
}

/// GET `{base}/health` and return the raw body of a 2xx reply.
pub async fn fetch(base: &str, timeout_ms: u64) -> Result<Bytes, RelayError> {
    let uri: hyper::Uri = format!("{}/health", base.trim_end_matches('/'))
        .parse()
        .map_err(RelayError::uri)?;
    let req = hyper::Request::get(uri)
        .body(Full::new(Bytes::new()))
        .map_err(RelayError::http)?;

    let client = build_http_client();
    let exchange = async {
        let response = client.request(req).await.map_err(RelayError::http)?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(RelayError::http)?
            .to_bytes();
        Ok::<_, RelayError>((status, body))
    };

    let (status, body) = tokio::time::timeout(Duration::from_millis(timeout_ms), exchange)
        .await
        .map_err(|_| RelayError::Timeout {
            sink: "health endpoint",
            timeout_ms,
        })??;

    if !status.is_success() {
        return Err(RelayError::HealthCheckFailed(status));
    }
    Ok(body)
}

/// Human-readable report: sink, uptime, and how many attempted entries made it through.
#[must_use]
pub fn summarize(url: &str, health: &HealthResponse) -> String {
    let stats = &health.stats;
    let attempted = stats.entries_relayed + stats.entries_failed;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\u{2713} relayto v{} relaying to {} ({url})",
        health.version, health.sink
    );
    let _ = writeln!(out, "  up {}", humanize(Duration::from_secs(health.uptime_seconds)));
    if attempted == 0 {
        let _ = writeln!(out, "  no entries forwarded yet");
    } else {
        let _ = writeln!(
            out,
            "  {}/{attempted} entries delivered ({}%)",
            stats.entries_relayed,
            stats.entries_relayed * 100 / attempted
        );
    }
    if stats.decode_failures > 0 {
        let _ = writeln!(out, "  {} bodies rejected before forwarding", stats.decode_failures);
    }
    out
}

/// Two most significant units, e.g. `3d 4h` or `12m 5s`.
fn humanize(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let units = [
        (total / 86_400, 'd'),
        (total % 86_400 / 3_600, 'h'),
        (total % 3_600 / 60, 'm'),
        (total % 60, 's'),
    ];
    let first = units.iter().position(|(n, _)| *n > 0).unwrap_or(units.len() - 1);
    units[first..]
        .iter()
        .take(2)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}
