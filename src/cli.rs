use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Deliver Scout scan results to the runtime ingest endpoint
#[derive(Parser)]
#[command(name = "scout-ingest")]
#[command(about = "Normalize Scout results and send them to /mcp/runtime/ingest", long_about = None)]
pub struct Cli {
    /// Base URL of the ingest API (overrides MCP_API_URL)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a scout results file
    Send {
        /// JSON file with scout results, or `-` for stdin
        file: PathBuf,
    },
    /// Print the normalized payload without sending it
    Preview {
        /// JSON file with scout results, or `-` for stdin
        file: PathBuf,
    },
    /// Print the resolved ingest URL
    Target,
}
