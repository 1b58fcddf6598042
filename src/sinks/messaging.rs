//! Messaging platform sink: sends the entry content as an `UPDATE`
//! message to a single Messenger recipient.

use async_trait::async_trait;
use serde::Serialize;

use super::{post_json, warn_on_rejection, Forwarder};
use crate::config::MessagingConfig;
use crate::error::RelayError;
use crate::relay::{Entry, SUCCESSFUL};
use crate::server::HttpClient;

const SINK: &str = "messaging";
const MESSAGING_TYPE_UPDATE: &str = "UPDATE";

#[derive(Debug, Serialize)]
pub struct MessagingPayload<'a> {
    pub messaging_type: &'static str,
    pub recipient: Recipient<'a>,
    pub message: Message<'a>,
}

#[derive(Debug, Serialize)]
pub struct Recipient<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub text: &'a str,
}

pub struct MessagingForwarder {
    config: MessagingConfig,
    client: HttpClient,
}

impl MessagingForwarder {
    #[must_use]
    pub const fn new(config: MessagingConfig, client: HttpClient) -> Self {
        Self { config, client }
    }

    #[must_use]
    pub fn payload<'a>(&'a self, entry: &'a Entry) -> MessagingPayload<'a> {
        MessagingPayload {
            messaging_type: MESSAGING_TYPE_UPDATE,
            recipient: Recipient {
                id: &self.config.recipient_id,
            },
            message: Message {
                text: &entry.content,
            },
        }
    }

    /// Send endpoint with the access token appended as a query parameter.
    pub fn endpoint(&self) -> Result<url::Url, RelayError> {
        url::Url::parse_with_params(
            &self.config.api_url,
            &[("access_token", self.config.access_token.as_str())],
        )
        .map_err(RelayError::uri)
    }
}

#[async_trait]
impl Forwarder for MessagingForwarder {
    fn name(&self) -> &'static str {
        SINK
    }

    async fn send(&self, entry: &Entry) -> Result<String, RelayError> {
        let body = serde_json::to_vec(&self.payload(entry))
            .map_err(|source| RelayError::Encode { sink: SINK, source })?;
        let endpoint = self.endpoint()?;

        let delivery = post_json(
            &self.client,
            SINK,
            endpoint.as_str(),
            None,
            body,
            self.config.timeout_ms,
        )
        .await?;
        warn_on_rejection(SINK, &delivery);

        Ok(SUCCESSFUL.to_string())
    }
}
