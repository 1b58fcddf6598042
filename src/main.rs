use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = relayto::cli::Cli::parse();
    if let Err(e) = relayto::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
