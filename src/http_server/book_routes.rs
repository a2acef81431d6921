//! Book HTTP Routes
//!
//! The five catalog endpoints: create, list, detail, update and delete.
//! Handlers translate between the wire envelopes and the catalog service;
//! every failure path goes through `CatalogError`, which carries its own
//! status code and envelope label.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::catalog::{
    BookFilter, BookInput, CatalogError, CatalogService, InMemoryBookRepository,
};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::response::{
    BookData, BookListData, CreatedResponse, DataResponse, MessageResponse,
};

// ==================
// Success Messages
// ==================

const ADDED_MESSAGE: &str = "Buku berhasil ditambahkan";
const UPDATED_MESSAGE: &str = "Buku berhasil diperbarui";
const DELETED_MESSAGE: &str = "Buku berhasil dihapus";

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub service: CatalogService<InMemoryBookRepository>,
    pub metrics: Arc<MetricsRegistry>,
}

impl CatalogState {
    /// Create state with an empty catalog
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            service: CatalogService::new(InMemoryBookRepository::new()),
            metrics,
        }
    }
}

// ==================
// Request Types
// ==================

/// Raw list query parameters; precedence is resolved by `BookFilter`
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    pub reading: Option<String>,
    pub finished: Option<String>,
    pub name: Option<String>,
}

// ==================
// Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/books", post(create_book_handler))
        .route("/books", get(list_books_handler))
        .route("/books/{bookId}", get(get_book_handler))
        .route("/books/{bookId}", put(update_book_handler))
        .route("/books/{bookId}", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// POST /books
async fn create_book_handler(
    State(state): State<Arc<CatalogState>>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), CatalogError> {
    let book_id = state
        .service
        .create_book(input)
        .map_err(|err| note_failure(&state.metrics, err))?;

    state.metrics.increment_books_created();
    log_event_with_fields(Event::BookCreated, &[("book_id", &book_id)]);

    let body = CreatedResponse::new(ADDED_MESSAGE, book_id);
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /books
async fn list_books_handler(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<DataResponse<BookListData>>, CatalogError> {
    let filter = BookFilter::from_query(
        query.reading.as_deref(),
        query.finished.as_deref(),
        query.name.as_deref(),
    );

    let books = state
        .service
        .list_books(&filter)
        .map_err(|err| note_failure(&state.metrics, err))?;

    state.metrics.increment_list_requests();
    Ok(Json(DataResponse::success(BookListData { books })))
}

/// GET /books/{bookId}
async fn get_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(book_id): Path<String>,
) -> Result<Json<DataResponse<BookData>>, CatalogError> {
    let book = state
        .service
        .get_book(&book_id)
        .map_err(|err| note_failure(&state.metrics, err))?;

    state.metrics.increment_detail_requests();
    Ok(Json(DataResponse::success(BookData { book })))
}

/// PUT /books/{bookId}
async fn update_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(book_id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<Json<MessageResponse>, CatalogError> {
    state
        .service
        .update_book(&book_id, input)
        .map_err(|err| note_failure(&state.metrics, err))?;

    state.metrics.increment_books_updated();
    log_event_with_fields(Event::BookUpdated, &[("book_id", &book_id)]);

    Ok(Json(MessageResponse::success(UPDATED_MESSAGE)))
}

/// DELETE /books/{bookId}
async fn delete_book_handler(
    State(state): State<Arc<CatalogState>>,
    Path(book_id): Path<String>,
) -> Result<Json<MessageResponse>, CatalogError> {
    state
        .service
        .delete_book(&book_id)
        .map_err(|err| note_failure(&state.metrics, err))?;

    state.metrics.increment_books_deleted();
    log_event_with_fields(Event::BookDeleted, &[("book_id", &book_id)]);

    Ok(Json(MessageResponse::success(DELETED_MESSAGE)))
}

// ==================
// Helper Functions
// ==================

/// Count and log a failed operation, passing the error through.
fn note_failure(metrics: &MetricsRegistry, err: CatalogError) -> CatalogError {
    match err.status_code() {
        400 => {
            metrics.increment_validation_failures();
            log_event_with_fields(Event::BookRejected, &[("reason", &err.to_string())]);
        }
        404 => {
            metrics.increment_not_found_responses();
        }
        _ => {
            log_event_with_fields(Event::CatalogError, &[("detail", &err.to_string())]);
        }
    }
    err
}
