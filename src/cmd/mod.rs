//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`send`], or [`health`]. Each handler
//! lives in its own submodule.

pub mod health;
pub mod run;
pub mod send;

use crate::cli::{Cli, Commands};
use crate::error::RelayError;

pub async fn dispatch(cli: Cli) -> Result<(), RelayError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Send(args)) => send::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  relayto v{version} \u{2014} JSON entry relay\n\n  \
         No command provided. To get started:\n\n    \
         relayto run --sink chat           Serve the chat relay on :3000\n    \
         relayto send --sink chat ENTRY    Relay a single entry\n    \
         relayto --help                    See all commands and options\n"
    );
}
