//! Collection doubles for tests

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use super::{DbError, DocumentCollection};

fn offline() -> DbError {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "store offline");
    DbError::Mongo(mongodb::error::Error::from(io))
}

/// Every call fails as an unreachable store would.
pub struct FailingCollection;

#[async_trait]
impl DocumentCollection for FailingCollection {
    async fn ping(&self) -> Result<(), DbError> {
        Err(offline())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DbError> {
        Err(offline())
    }

    async fn find_one(&self, _: Document) -> Result<Option<Document>, DbError> {
        Err(offline())
    }

    async fn insert_one(&self, _: Document) -> Result<Bson, DbError> {
        Err(offline())
    }

    async fn delete_one(&self, _: Document) -> Result<u64, DbError> {
        Err(offline())
    }

    async fn update_one(&self, _: Document, _: Document) -> Result<u64, DbError> {
        Err(offline())
    }

    async fn shutdown(&self) {}
}

/// Never answers within any sane timeout.
pub struct SlowCollection;

impl SlowCollection {
    async fn stall() {
        tokio::time::sleep(Duration::from_secs(3600)).await;
    }
}

#[async_trait]
impl DocumentCollection for SlowCollection {
    async fn ping(&self) -> Result<(), DbError> {
        Self::stall().await;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DbError> {
        Self::stall().await;
        Ok(Vec::new())
    }

    async fn find_one(&self, _: Document) -> Result<Option<Document>, DbError> {
        Self::stall().await;
        Ok(None)
    }

    async fn insert_one(&self, _: Document) -> Result<Bson, DbError> {
        Self::stall().await;
        Ok(Bson::Null)
    }

    async fn delete_one(&self, _: Document) -> Result<u64, DbError> {
        Self::stall().await;
        Ok(0)
    }

    async fn update_one(&self, _: Document, _: Document) -> Result<u64, DbError> {
        Self::stall().await;
        Ok(0)
    }

    async fn shutdown(&self) {}
}

/// Panics on any store access; for paths that must reject input first.
pub struct UntouchedCollection;

#[async_trait]
impl DocumentCollection for UntouchedCollection {
    async fn ping(&self) -> Result<(), DbError> {
        unreachable!("store must not be touched")
    }

    async fn find_all(&self) -> Result<Vec<Document>, DbError> {
        unreachable!("store must not be touched")
    }

    async fn find_one(&self, _: Document) -> Result<Option<Document>, DbError> {
        unreachable!("store must not be touched")
    }

    async fn insert_one(&self, _: Document) -> Result<Bson, DbError> {
        unreachable!("store must not be touched")
    }

    async fn delete_one(&self, _: Document) -> Result<u64, DbError> {
        unreachable!("store must not be touched")
    }

    async fn update_one(&self, _: Document, _: Document) -> Result<u64, DbError> {
        unreachable!("store must not be touched")
    }

    async fn shutdown(&self) {}
}
