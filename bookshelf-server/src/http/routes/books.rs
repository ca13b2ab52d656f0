//! Book endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::http::client_ip::ClientIp;
use crate::http::error::ApiError;
use crate::http::extractors::BookJson;
use crate::http::server::AppState;
use crate::models::{Book, BookPayload};

/// List response
#[derive(Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Confirmation response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Outcome of the concurrent list + delete demonstration
#[derive(Debug, Serialize)]
pub struct ConcurrentResponse {
    pub message: &'static str,
    /// Number of books listed, `None` if the listing failed
    pub listed: Option<usize>,
    pub deleted: bool,
}

/// POST /books - create a book, respond with its id
async fn create_book(
    State(state): State<Arc<AppState>>,
    BookJson(payload): BookJson<BookPayload>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    let id = state.books.insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /books - list all books (204 when there are none)
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let books = state.books.list().await?;

    if books.is_empty() {
        return Ok((
            StatusCode::NO_CONTENT,
            Json(serde_json::json!({ "message": "No books found" })),
        )
            .into_response());
    }

    Ok(Json(BooksResponse { books }).into_response())
}

/// GET /books/{name} - find a book by name (`null` when absent)
async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Option<Book>>, ApiError> {
    let book = state.books.find_by_name(&name).await?;
    Ok(Json(book))
}

/// PUT /books/{id} - replace name and price
async fn update_book(
    State(state): State<Arc<AppState>>,
    ClientIp(client_ip): ClientIp,
    Path(id): Path<String>,
    BookJson(payload): BookJson<BookPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!(%id, ?client_ip, "update book");
    state.books.update(&id, &payload).await?;

    Ok(Json(MessageResponse {
        message: "Book Successfully Updated",
    }))
}

/// DELETE /books/{identifier} - delete by id or name
async fn delete_book(
    State(state): State<Arc<AppState>>,
    ClientIp(client_ip): ClientIp,
    Path(identifier): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!(%identifier, ?client_ip, "delete book");
    state.books.delete(&identifier).await?;

    Ok(Json(MessageResponse {
        message: "Book Successfully Deleted",
    }))
}

/// DELETE /books/{identifier}/concurrent - list and delete as two independent tasks
///
/// Both tasks are joined before responding. The response is always 200; each
/// task's outcome is reported in the body and failures are logged.
async fn concurrent_list_and_delete(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Json<ConcurrentResponse> {
    let repo = state.books.clone();
    let listing = tokio::spawn(async move { repo.list().await });

    let repo = state.books.clone();
    let deletion = tokio::spawn(async move { repo.delete(&identifier).await });

    let (listing, deletion) = tokio::join!(listing, deletion);

    let listed = match listing {
        Ok(Ok(books)) => {
            tracing::info!(count = books.len(), "fetched books");
            Some(books.len())
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "error fetching books");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "list task failed");
            None
        }
    };

    let deleted = match deletion {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "error deleting book");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "delete task failed");
            false
        }
    };

    Json(ConcurrentResponse {
        message: "Concurrent operations completed",
        listed,
        deleted,
    })
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{identifier}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route(
            "/books/{identifier}/concurrent",
            delete(concurrent_list_and_delete),
        )
}
