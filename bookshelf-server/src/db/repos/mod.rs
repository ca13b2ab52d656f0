//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Decodes documents into domain types (store shapes stay private)
//! - Bounds every call with the configured timeout
//! - Reports "no match" as `DbError::NotFound`, never as a store failure

pub mod books;

pub use books::{BookFilter, BookRepo};
