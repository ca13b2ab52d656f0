//! In-memory document collection
//!
//! Thread-safe stand-in for a MongoDB collection, used by `serve --in-memory`
//! and by tests. Documents keep insertion order and filters use the store's
//! equality semantics: every filter key must be present and equal.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use super::{DbError, DocumentCollection};

#[derive(Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DbError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, DbError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn insert_one(&self, mut document: Document) -> Result<Bson, DbError> {
        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };
        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, DbError> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_one(&self, filter: Document, set: Document) -> Result<u64, DbError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| matches(d, &filter)) {
            Some(document) => {
                for (key, value) in set {
                    document.insert(key, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn insert_assigns_object_id() {
        let collection = MemoryCollection::new();
        let id = collection
            .insert_one(doc! { "name": "Dune", "price": 9.99 })
            .await
            .unwrap();

        assert!(id.as_object_id().is_some());
        let stored = collection.find_one(doc! { "_id": id }).await.unwrap();
        assert_eq!(stored.unwrap().get_str("name").unwrap(), "Dune");
    }

    #[tokio::test]
    async fn filter_key_must_exist() {
        let collection = MemoryCollection::new();
        let id = collection
            .insert_one(doc! { "name": "Dune", "price": 9.99 })
            .await
            .unwrap();

        // "id" is not the stored key; nothing matches
        let deleted = collection.delete_one(doc! { "id": id }).await.unwrap();
        assert_eq!(deleted, 0);
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn update_sets_only_given_fields() {
        let collection = MemoryCollection::new();
        collection
            .insert_one(doc! { "name": "Dune", "price": 9.99, "author": "Herbert" })
            .await
            .unwrap();

        let matched = collection
            .update_one(doc! { "name": "Dune" }, doc! { "price": 12.5 })
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let stored = collection
            .find_one(doc! { "name": "Dune" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.get_f64("price").unwrap(), 12.5);
        assert_eq!(stored.get_str("author").unwrap(), "Herbert");
    }

    #[tokio::test]
    async fn delete_removes_only_first_match() {
        let collection = MemoryCollection::new();
        collection.insert_one(doc! { "name": "twin" }).await.unwrap();
        collection.insert_one(doc! { "name": "twin" }).await.unwrap();

        let deleted = collection.delete_one(doc! { "name": "twin" }).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(collection.len().await, 1);
    }
}
