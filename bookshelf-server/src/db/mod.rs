//! Database layer - collection handle and repositories
//!
//! # Design Principles
//!
//! - One client per process, connected eagerly at startup and shared by handle
//! - The collection handle is resolved once and reused for every call
//! - Every call is bounded by a timeout and returns a `DbError`, never aborts
//! - Not-found is its own variant, distinct from store failures

pub mod collection;
pub mod error;
pub mod memory;
pub mod repos;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::{DocumentCollection, MongoCollection, StoreConfig};
pub use error::DbError;
pub use memory::MemoryCollection;
pub use repos::*;
