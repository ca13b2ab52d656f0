//! Domain models exchanged over HTTP

pub mod book;

pub use book::{Book, BookPayload};
