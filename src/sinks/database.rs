//! Document database sink: inserts the entry into a MongoDB collection.
//!
//! A fresh client is opened for every entry and shut down once the insert
//! has finished, whether it succeeded or not. No connection pool outlives
//! the call. Connecting and inserting together never exceed the configured
//! connect timeout.

use async_trait::async_trait;
use mongodb::bson::Bson;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tokio::time::Instant;

use super::Forwarder;
use crate::config::DatabaseSettings;
use crate::error::RelayError;
use crate::relay::Entry;

const SINK: &str = "database";
const APP_NAME: &str = "relayto";

fn database_error(e: mongodb::error::Error) -> RelayError {
    RelayError::Database {
        backend: "mongodb",
        source: Box::new(e),
    }
}

/// Canonical string form of the inserted document id.
#[must_use]
pub fn success_marker(inserted_id: &Bson) -> String {
    match inserted_id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

pub struct DatabaseForwarder {
    settings: DatabaseSettings,
}

impl DatabaseForwarder {
    #[must_use]
    pub const fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }

    async fn connect(&self) -> Result<Client, RelayError> {
        let mut options = ClientOptions::parse(self.settings.connection_uri())
            .await
            .map_err(database_error)?;
        options.connect_timeout = Some(self.settings.connect_timeout());
        options.server_selection_timeout = Some(self.settings.connect_timeout());
        options.app_name = Some(APP_NAME.to_string());

        Client::with_options(options).map_err(database_error)
    }
}

#[async_trait]
impl Forwarder for DatabaseForwarder {
    fn name(&self) -> &'static str {
        SINK
    }

    async fn send(&self, entry: &Entry) -> Result<String, RelayError> {
        // Connection-string resolution (SRV/TXT lookups) and the insert share one deadline.
        let deadline = Instant::now() + self.settings.connect_timeout();
        let elapsed = |_| RelayError::Timeout {
            sink: SINK,
            timeout_ms: self.settings.connect_timeout_ms,
        };

        let client = tokio::time::timeout_at(deadline, self.connect())
            .await
            .map_err(elapsed)??;

        let outcome = {
            let collection = client
                .database(&self.settings.database_name)
                .collection::<Entry>(&self.settings.collection_name);
            tokio::time::timeout_at(deadline, async { collection.insert_one(entry).await }).await
        };

        client.shutdown().await;

        let inserted = outcome.map_err(elapsed)?.map_err(database_error)?;
        Ok(success_marker(&inserted.inserted_id))
    }
}
