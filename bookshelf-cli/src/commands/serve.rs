//! HTTP server command
//!
//! Connects to the store, verifies it, then runs the catalog API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use bookshelf_server::{run_server, BookRepo, MemoryCollection, ServerConfig, TrustedProxies};
use clap::Parser;

use super::{connect_store, StoreArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "127.0.0.1:8082")]
    pub bind: SocketAddr,

    /// Comma-separated proxy addresses trusted to set X-Forwarded-For
    #[arg(long, env = "BOOKSHELF_TRUSTED_PROXIES", default_value = "192.168.1.2")]
    pub trusted_proxies: TrustedProxies,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve from an in-memory collection instead of MongoDB (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let books = if args.in_memory {
        tracing::warn!("Using in-memory collection; data will not persist");
        BookRepo::new(Arc::new(MemoryCollection::new()))
    } else {
        connect_store(&args.store).await?
    };

    tracing::info!("Starting bookshelf server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        trusted_proxies: args.trusted_proxies,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(books, config).await.context("Server error")?;

    Ok(())
}
