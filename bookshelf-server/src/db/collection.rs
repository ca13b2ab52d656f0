//! Document collection trait and the MongoDB implementation
//!
//! Provides a trait for raw document operations, with:
//! - Real implementation over the `mongodb` driver
//! - In-memory implementation for development and tests (see `memory`)
//!
//! Filters are plain BSON documents; decoding into domain types happens in the
//! repositories so both implementations share the same semantics.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::DbError;

/// Default database name
pub const DEFAULT_DATABASE: &str = "BookShop";

/// Default collection name
pub const DEFAULT_COLLECTION: &str = "Books";

/// Bound on connection establishment and on every store call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Store connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string (`mongodb://` or `mongodb+srv://`)
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Raw document operations against a single named collection (testable)
#[async_trait]
pub trait DocumentCollection: Send + Sync + 'static {
    /// Liveness check against the store.
    async fn ping(&self) -> Result<(), DbError>;

    /// Every document, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Document>, DbError>;

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, DbError>;

    /// Insert a document, returning the id the store recorded for it.
    async fn insert_one(&self, document: Document) -> Result<Bson, DbError>;

    /// Delete at most one matching document, returning the deleted count.
    async fn delete_one(&self, filter: Document) -> Result<u64, DbError>;

    /// `$set` the given fields on at most one matching document, returning the matched count.
    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, DbError>;

    /// Release the underlying connection (best effort).
    async fn shutdown(&self);
}

/// MongoDB-backed collection with a single shared client
#[derive(Clone)]
pub struct MongoCollection {
    client: Client,
    collection: Collection<Document>,
}

impl MongoCollection {
    /// Build the client and resolve the collection handle.
    ///
    /// The driver connects lazily; the configured timeout bounds both connection
    /// establishment and server selection, so the first `ping` fails fast when the
    /// store is unreachable.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let collection = MongoCollection::connect(&StoreConfig::new("mongodb://localhost:27017")).await?;
    /// collection.ping().await?;
    /// ```
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbError> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.connect_timeout = Some(config.timeout);
        options.server_selection_timeout = Some(config.timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        tracing::debug!(
            database = %config.database,
            collection = %config.collection,
            "resolved collection handle"
        );

        Ok(Self { client, collection })
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn ping(&self) -> Result<(), DbError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DbError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, DbError> {
        Ok(self.collection.find_one(filter).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<Bson, DbError> {
        let result = self.collection.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, DbError> {
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, DbError> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": set })
            .await?;
        Ok(result.matched_count)
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("database connection closed");
    }
}
