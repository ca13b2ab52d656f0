//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Client IP resolution behind trusted proxies
//! - Graceful shutdown
//! - JSON error responses

pub mod client_ip;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use client_ip::{ClientIp, TrustedProxies};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
