//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, send, health), and their associated argument
//! structs. Every flag has an environment variable equivalent so the
//! relay can be configured entirely from a function or container runtime.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{ChatConfig, MessagingConfig, SinkConfig};
use crate::error::RelayError;

#[derive(Parser)]
#[command(
    name = "relayto",
    version,
    about = "Relay JSON entries to a database, chat or messaging sink",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        relayto run --sink chat                        Serve the chat relay on :3000\n  \
        relayto send --sink chat '{\"content\":\"hi\",\"timestamp\":1}'\n  \
        relayto health                                 Check a running instance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Run(Box<RunArgs>),

    /// Relay a single entry and print the result
    Send(Box<SendArgs>),

    /// Check health of a running instance
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        relayto run --sink chat -p 8080 --pretty        Local dev mode\n  \
        RELAY_SINK=database relayto run                  Configure from env")]
pub struct RunArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,

    #[command(flatten)]
    pub sink: SinkArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,

    // -- Observability --
    /// Sentry DSN (enables error tracking)
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_DSN", help_heading = "Observability")]
    pub sentry_dsn: Option<String>,

    /// Sentry environment tag
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_ENVIRONMENT", help_heading = "Observability")]
    pub sentry_environment: Option<String>,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        relayto send --sink chat '{\"content\":\"hello\",\"timestamp\":1620000000}'\n  \
        echo '{\"content\":\"hi\",\"timestamp\":1}' | relayto send --sink messaging")]
pub struct SendArgs {
    /// Entry JSON; read from stdin when omitted
    pub entry: Option<String>,

    #[command(flatten)]
    pub sink: SinkArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Give up after this many milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct LoggingArgs {
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

/// Destination selection and credentials.
///
/// Values missing from the environment default to empty strings; the
/// destination reports them as connection or authentication failures.
#[derive(Args)]
pub struct SinkArgs {
    /// Sink that receives relayed entries
    #[arg(long, env = "RELAY_SINK")]
    pub sink: SinkKind,

    /// Outbound webhook timeout in milliseconds
    #[arg(
        long,
        env = "REQUEST_TIMEOUT_MS",
        default_value_t = 5000,
        help_heading = "Tuning"
    )]
    pub timeout: u64,

    // -- Database sink --
    /// Database host (cluster address)
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "URL_ENDPOINT", default_value = "", hide_default_value = true, help_heading = "Database Sink")]
    pub url_endpoint: String,

    /// Database name
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "DATABASE_NAME", default_value = "", hide_default_value = true, help_heading = "Database Sink")]
    pub database_name: String,

    /// Collection receiving entries
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "COLLECTION_NAME", default_value = "", hide_default_value = true, help_heading = "Database Sink")]
    pub collection_name: String,

    /// Database user
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "USERNAME", default_value = "", hide_default_value = true, help_heading = "Database Sink")]
    pub username: String,

    /// Database password
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "PASSWORD", default_value = "", hide_default_value = true, hide_env_values = true, help_heading = "Database Sink")]
    pub password: String,

    /// Connection string scheme
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "DATABASE_SCHEME", default_value = "mongodb+srv", help_heading = "Database Sink")]
    pub database_scheme: String,

    /// Database connect timeout in milliseconds
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_MS", default_value_t = 10_000, help_heading = "Database Sink")]
    pub database_connect_timeout: u64,

    // -- Chat sink --
    /// Chat bot token
    #[arg(long, env = "SLACK_TOKEN", default_value = "", hide_default_value = true, hide_env_values = true, help_heading = "Chat Sink")]
    pub slack_token: String,

    /// Chat channel identifier
    #[arg(long, env = "SLACK_CHANNEL", default_value = "", hide_default_value = true, help_heading = "Chat Sink")]
    pub slack_channel: String,

    /// Chat message-post endpoint
    #[arg(long, env = "SLACK_API_URL", default_value = crate::config::SLACK_POST_MESSAGE_URL, help_heading = "Chat Sink")]
    pub slack_api_url: String,

    // -- Messaging sink --
    /// Messaging recipient identifier
    #[arg(long, env = "MESSENGER_ID", default_value = "", hide_default_value = true, help_heading = "Messaging Sink")]
    pub messenger_id: String,

    /// Messaging page access token
    #[arg(long, env = "MESSENGER_ACCESS_TOKEN", default_value = "", hide_default_value = true, hide_env_values = true, help_heading = "Messaging Sink")]
    pub messenger_access_token: String,

    /// Messaging send endpoint
    #[arg(long, env = "MESSENGER_API_URL", default_value = crate::config::MESSENGER_SEND_URL, help_heading = "Messaging Sink")]
    pub messenger_api_url: String,
}

impl SinkArgs {
    /// Collapse the flags relevant to the selected sink into a [`SinkConfig`].
    pub fn to_config(&self) -> Result<SinkConfig, RelayError> {
        let config = match self.sink {
            #[cfg(feature = "mongodb")]
            SinkKind::Database => SinkConfig::Database(crate::config::DatabaseSettings {
                scheme: self.database_scheme.clone(),
                url_endpoint: self.url_endpoint.clone(),
                database_name: self.database_name.clone(),
                collection_name: self.collection_name.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                connect_timeout_ms: self.database_connect_timeout,
            }),
            #[cfg(not(feature = "mongodb"))]
            SinkKind::Database => {
                return Err(RelayError::SinkUnavailable {
                    sink: "database",
                    feature: "mongodb",
                })
            }
            SinkKind::Chat => SinkConfig::Chat(ChatConfig {
                api_url: self.slack_api_url.clone(),
                token: self.slack_token.clone(),
                channel: self.slack_channel.clone(),
                timeout_ms: self.timeout,
            }),
            SinkKind::Messaging => SinkConfig::Messaging(MessagingConfig {
                api_url: self.messenger_api_url.clone(),
                recipient_id: self.messenger_id.clone(),
                access_token: self.messenger_access_token.clone(),
                timeout_ms: self.timeout,
            }),
        };
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// Document database (MongoDB)
    Database,
    /// Team chat (Slack)
    Chat,
    /// Messaging platform (Messenger)
    Messaging,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
