//! `relayto send` — relay one entry without starting a server.
//!
//! Reads the entry JSON from the argument or stdin, runs it through the
//! same decode → forward path as the HTTP handler, and prints the
//! resulting envelope. Exits non-zero when the entry was not relayed.

use std::io::Read;

use crate::cli::SendArgs;
use crate::error::RelayError;
use crate::logging;
use crate::relay;
use crate::server;
use crate::sinks;

pub async fn execute(args: SendArgs) -> Result<(), RelayError> {
    logging::init_from_args(&args.logging, logging::LogTarget::Stderr);

    let body = match args.entry {
        Some(entry) => entry,
        None => read_stdin()?,
    };

    let forwarder = sinks::build(args.sink.to_config()?, &server::build_http_client());
    let correlation_id = uuid::Uuid::new_v4().to_string();
    let (result, _) = relay::process(forwarder.as_ref(), body.as_bytes(), &correlation_id).await;

    let rendered = serde_json::to_string(&result).map_err(|source| RelayError::Encode {
        sink: forwarder.name(),
        source,
    })?;
    println!("{rendered}");

    if result.ok {
        Ok(())
    } else {
        Err(RelayError::NotRelayed(result.result))
    }
}

fn read_stdin() -> Result<String, RelayError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(RelayError::MissingEntry {
            hint: "Pass the entry JSON as an argument or pipe it on stdin.".into(),
        });
    }
    Ok(buf)
}
