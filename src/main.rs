//! Main entry point for the translate client CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_client::cli::commands::{self, Commands, GlobalOptions};

/// Query the Cloud Translation v2 API from the command line
#[derive(Parser, Debug)]
#[command(name = "translate-client", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TRANSLATE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the full response envelope as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), default_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = GlobalOptions {
        api_key: args.api_key,
        base_url: args.base_url,
        timeout_ms: args.timeout_ms,
        json: args.json,
    };

    commands::execute(args.command, options).await
}
