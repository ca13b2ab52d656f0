//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Client IP resolution against the trusted proxy list
//! - Graceful shutdown on SIGTERM/Ctrl+C, then release of the store connection

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::client_ip::{resolve_client_ip, TrustedProxies};
use super::routes;
use crate::db::BookRepo;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8082)
    pub bind_addr: SocketAddr,

    /// Peers allowed to report the client address via `X-Forwarded-For`
    pub trusted_proxies: TrustedProxies,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8082)),
            trusted_proxies: TrustedProxies::default(),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub books: BookRepo,
}

fn is_local_origin(origin: &HeaderValue, _parts: &Parts) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    ["http://localhost", "http://127.0.0.1"].iter().any(|host| {
        origin
            .strip_prefix(host)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(is_local_origin))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let proxies = Arc::new(config.trusted_proxies.clone());

    // Middleware stack (outermost first)
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn_with_state(proxies, resolve_client_ip));

    Router::new()
        .merge(routes::health::router())
        .merge(routes::books::router())
        .layer(layers)
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The repository must already be connected and verified; it is shut down after
/// the listener stops. In-flight requests are not drained.
///
/// # Example
///
/// ```ignore
/// let collection = MongoCollection::connect(&StoreConfig::new(url)).await?;
/// let books = BookRepo::new(Arc::new(collection));
/// books.ping().await?;
/// run_server(books, ServerConfig::default()).await?;
/// ```
pub async fn run_server(books: BookRepo, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        trusted_proxies = ?config.trusted_proxies.as_slice(),
        "trusted proxies configured"
    );

    let state = AppState {
        books: books.clone(),
    };
    let app = build_router(state, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    books.shutdown().await;
    served?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
