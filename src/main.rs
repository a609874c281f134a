mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use scout_ingest::IngestAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load env
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let adapter = IngestAdapter::new(cli.endpoint.as_deref());

    match cli.command {
        Commands::Send { file } => commands::send(&adapter, &file).await,
        Commands::Preview { file } => commands::preview(&adapter, &file),
        Commands::Target => {
            println!("{}", adapter.ingest_url());
            Ok(())
        }
    }
}
