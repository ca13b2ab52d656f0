//! Subcommands

pub mod ping;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use bookshelf_server::db::collection::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use bookshelf_server::{BookRepo, MongoCollection, StoreConfig};
use clap::Args;

pub use ping::{run_ping, PingArgs};
pub use serve::{run_serve, ServeArgs};

/// Store connection arguments shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database holding the book collection
    #[arg(long, env = "BOOKSHELF_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Collection holding book documents
    #[arg(long, env = "BOOKSHELF_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

impl StoreArgs {
    fn store_config(&self) -> Result<StoreConfig> {
        let uri = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.bookshelf/.env")?;

        let mut config = StoreConfig::new(uri);
        config.database = self.database.clone();
        config.collection = self.collection.clone();
        Ok(config)
    }
}

/// Connect to the configured store and verify it answers a ping.
pub async fn connect_store(args: &StoreArgs) -> Result<BookRepo> {
    let config = args.store_config()?;

    let collection = MongoCollection::connect(&config)
        .await
        .context("Failed to create database client")?;
    let books = BookRepo::new(Arc::new(collection)).with_timeout(config.timeout);

    books
        .ping()
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        database = %config.database,
        collection = %config.collection,
        "Successfully connected to database"
    );

    Ok(books)
}
