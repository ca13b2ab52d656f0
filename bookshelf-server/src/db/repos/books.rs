//! Book repository - the storage gateway for the catalog
//!
//! Handles book CRUD over a shared collection handle:
//! - list: full scan, undecodable documents are skipped and logged
//! - find_by_name: exact match, absence is `Ok(None)`
//! - delete: ObjectId first, name fallback
//! - update: ObjectId only, `$set` of name/price

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document};
use serde::Deserialize;

use crate::db::collection::DEFAULT_TIMEOUT;
use crate::db::{DbError, DocumentCollection};
use crate::models::{Book, BookPayload};

/// Store-assigned id field. Filters on any other key never match by id.
pub const ID_FIELD: &str = "_id";
pub const NAME_FIELD: &str = "name";
pub const PRICE_FIELD: &str = "price";

const RESOURCE: &str = "book";

/// Book as stored in the collection
#[derive(Debug, Deserialize)]
struct BookRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    price: f64,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: r.id.to_hex(),
            name: r.name,
            price: r.price,
        }
    }
}

/// How an identifier from a request selects a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    Id(ObjectId),
    Name(String),
}

impl BookFilter {
    /// Interpret `identifier` as an ObjectId, falling back to a name match.
    pub fn parse(identifier: &str) -> Self {
        match ObjectId::parse_str(identifier) {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(identifier.to_owned()),
        }
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        match self {
            Self::Id(id) => filter.insert(ID_FIELD, *id),
            Self::Name(name) => filter.insert(NAME_FIELD, name.as_str()),
        };
        filter
    }
}

fn decode(document: Document) -> Result<Book, DbError> {
    let record: BookRecord = bson::from_document(document)?;
    Ok(record.into())
}

/// Book repository
#[derive(Clone)]
pub struct BookRepo {
    collection: Arc<dyn DocumentCollection>,
    timeout: Duration,
}

impl BookRepo {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self {
            collection,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-call timeout (default 10 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn timed<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, DbError>>,
    ) -> Result<T, DbError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(DbError::Timeout {
                operation,
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// Liveness check against the store.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.timed("ping", self.collection.ping()).await
    }

    /// List every book in the store's natural order.
    ///
    /// A document that fails to decode is skipped; a failed query is an error.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let documents = self.timed("list books", self.collection.find_all()).await?;

        let mut books = Vec::with_capacity(documents.len());
        for document in documents {
            match decode(document) {
                Ok(book) => books.push(book),
                Err(e) => tracing::warn!(error = %e, "skipping undecodable book document"),
            }
        }
        Ok(books)
    }

    /// Find a book by exact name. Absence is `Ok(None)`.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Book>, DbError> {
        let filter = BookFilter::Name(name.to_owned()).to_document();
        let document = self
            .timed("find book", self.collection.find_one(filter))
            .await?;

        document.map(decode).transpose()
    }

    /// Insert a book under a fresh ObjectId, returning the id in hex form.
    pub async fn insert(&self, payload: &BookPayload) -> Result<String, DbError> {
        let mut document = Document::new();
        document.insert(ID_FIELD, ObjectId::new());
        document.insert(NAME_FIELD, payload.name.as_str());
        document.insert(PRICE_FIELD, payload.price);

        let inserted = self
            .timed("insert book", self.collection.insert_one(document))
            .await?;

        let id = inserted
            .as_object_id()
            .ok_or_else(|| DbError::UnexpectedId(inserted.to_string()))?;

        tracing::debug!(id = %id, name = %payload.name, "inserted book");
        Ok(id.to_hex())
    }

    /// Delete one book by ObjectId, or by name when `identifier` is not an ObjectId.
    pub async fn delete(&self, identifier: &str) -> Result<(), DbError> {
        let filter = BookFilter::parse(identifier);
        tracing::debug!(?filter, "deleting book");

        let deleted = self
            .timed("delete book", self.collection.delete_one(filter.to_document()))
            .await?;

        if deleted == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id: identifier.to_owned(),
            });
        }

        tracing::info!(identifier, "deleted book");
        Ok(())
    }

    /// Replace name and price on the book with ObjectId `id`; other fields are untouched.
    pub async fn update(&self, id: &str, payload: &BookPayload) -> Result<(), DbError> {
        let object_id = ObjectId::parse_str(id).map_err(|source| DbError::InvalidId {
            id: id.to_owned(),
            source,
        })?;

        let mut set = Document::new();
        set.insert(NAME_FIELD, payload.name.as_str());
        set.insert(PRICE_FIELD, payload.price);

        let matched = self
            .timed(
                "update book",
                self.collection
                    .update_one(BookFilter::Id(object_id).to_document(), set),
            )
            .await?;

        if matched == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id: id.to_owned(),
            });
        }
        Ok(())
    }

    /// Release the store connection (best effort).
    pub async fn shutdown(&self) {
        self.collection.shutdown().await;
    }
}
