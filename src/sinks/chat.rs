//! Team chat sink: posts the entry content to a Slack channel.

use async_trait::async_trait;
use serde::Serialize;

use super::{post_json, warn_on_rejection, Forwarder};
use crate::config::ChatConfig;
use crate::error::RelayError;
use crate::relay::{Entry, SUCCESSFUL};
use crate::server::HttpClient;

const SINK: &str = "chat";

#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

pub struct ChatForwarder {
    config: ChatConfig,
    client: HttpClient,
}

impl ChatForwarder {
    #[must_use]
    pub const fn new(config: ChatConfig, client: HttpClient) -> Self {
        Self { config, client }
    }

    #[must_use]
    pub fn payload<'a>(&'a self, entry: &'a Entry) -> ChatPayload<'a> {
        ChatPayload {
            channel: &self.config.channel,
            text: &entry.content,
        }
    }
}

#[async_trait]
impl Forwarder for ChatForwarder {
    fn name(&self) -> &'static str {
        SINK
    }

    async fn send(&self, entry: &Entry) -> Result<String, RelayError> {
        let body = serde_json::to_vec(&self.payload(entry))
            .map_err(|source| RelayError::Encode { sink: SINK, source })?;

        let delivery = post_json(
            &self.client,
            SINK,
            &self.config.api_url,
            Some(&self.config.token),
            body,
            self.config.timeout_ms,
        )
        .await?;
        warn_on_rejection(SINK, &delivery);

        Ok(SUCCESSFUL.to_string())
    }
}
