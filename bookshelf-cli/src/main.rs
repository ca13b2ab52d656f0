//! bookshelf CLI - runs the book catalog HTTP service
//!
//! Subcommands:
//! - `serve`: connect to MongoDB, verify it, and serve the catalog API
//! - `ping`: check that the configured store is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    author,
    version,
    about = "Book catalog service backed by MongoDB"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Check connectivity to the configured database
    Ping(commands::PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing: flags fall back to variables these files may define
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    if env_files.is_empty() {
        tracing::debug!("No .env files found (current dir or ~/.bookshelf)");
    } else {
        tracing::info!(files = ?env_files, "Loaded configuration from .env");
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }
    Ok(())
}
