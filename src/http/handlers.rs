//! HTTP handlers for the books REST API.
//!
//! Each handler corresponds to an API endpoint and delegates persistence to
//! the store behind [`AppState`]. Conditional handlers recompute the entity
//! tag from the current book before consulting the request headers.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::HealthResponse;
use super::error::AppError;
use super::etag::{self, EntityTag, Precondition};
use super::state::AppState;
use crate::model::{Book, BookDraft, BookId, BookPatch};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.store.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Books
// =============================================================================

/// GET /books
///
/// List all books as a bare JSON array.
pub async fn list_books(State(state): State<AppState>) -> HandlerResult<Vec<Book>> {
    let books = state.store.list().await?;
    Ok(Json(books))
}

/// GET /books/{id}
///
/// Fetch a single book. A matching `If-None-Match` answers `304 Not
/// Modified` with the current tag and no body; otherwise the book is served
/// with its tag in the `ETag` header.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let book = state.store.get(&id).await?;
    let tag = EntityTag::from_book(&book);

    match etag::evaluate(&Method::GET, &headers, &tag) {
        Precondition::NotModified => {
            Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, tag.to_string())]).into_response())
        }
        Precondition::Failed => Err(AppError::PreconditionFailed(format!(
            "Entity tag mismatch for book {}",
            id
        ))),
        Precondition::Proceed => {
            Ok(([(header::ETAG, tag.to_string())], Json(book)).into_response())
        }
    }
}

/// POST /books
///
/// Create a book from a draft. The draft is validated before the store is
/// asked to persist anything; the created book comes back with its assigned
/// id and `201 Created`.
pub async fn create_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    draft.validate().map_err(AppError::BadRequest)?;

    let created = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /books/{id}
///
/// Partially update a book. The current book is fetched first and its tag
/// checked against `If-Match`; a mismatch answers `412 Precondition Failed`
/// without touching the store. An absent `If-Match` updates
/// unconditionally.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    headers: HeaderMap,
    Json(patch): Json<BookPatch>,
) -> HandlerResult<Book> {
    let current = state.store.get(&id).await?;
    let tag = EntityTag::from_book(&current);

    if etag::evaluate(&Method::PATCH, &headers, &tag) != Precondition::Proceed {
        return Err(AppError::PreconditionFailed(format!(
            "Entity tag mismatch for book {}",
            id
        )));
    }

    let updated = state.store.update(&id, patch).await?;
    Ok(Json(updated))
}
