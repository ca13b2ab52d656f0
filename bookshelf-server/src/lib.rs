//! bookshelf-server: HTTP catalog of book records
//!
//! Exposes create/list/find/update/delete over JSON routes, backed by a
//! single MongoDB collection (or an in-memory collection for development).

pub mod db;
pub mod http;
pub mod models;

pub use db::{BookRepo, DbError, DocumentCollection, MemoryCollection, MongoCollection, StoreConfig};
pub use http::{run_server, ServerConfig, ServerError, TrustedProxies};
pub use models::{Book, BookPayload};
