//! # Response Envelopes
//!
//! Every endpoint answers with a `status`/`message`/`data` envelope. This
//! module defines the success envelope shapes, the failure envelope, and
//! the mapping from catalog errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::catalog::{Book, BookSummary, CatalogError};

/// Envelope status for successful operations
pub const STATUS_SUCCESS: &str = "success";

// ==================
// Success envelopes
// ==================

/// Success envelope carrying only a message (update, delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    /// Create a success envelope with the given message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
        }
    }
}

/// Success envelope carrying only data (list, detail)
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Create a success envelope with the given data
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data,
        }
    }
}

/// Success envelope for create: message plus the generated id
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

impl CreatedResponse {
    /// Create the envelope for a newly stored book
    pub fn new(message: impl Into<String>, book_id: String) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data: BookIdData { book_id },
        }
    }
}

// ==================
// Data payloads
// ==================

/// `{"bookId": ...}` payload of the create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// `{"books": [...]}` payload of the list response
#[derive(Debug, Clone, Serialize)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// `{"book": {...}}` payload of the detail response
#[derive(Debug, Clone, Serialize)]
pub struct BookData {
    pub book: Book,
}

// ==================
// Failure envelope
// ==================

/// Failure envelope: `status` is "fail" for client-caused errors and
/// "error" for server-caused ones
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub status: String,
    pub message: String,
}

impl From<&CatalogError> for FailureResponse {
    fn from(err: &CatalogError) -> Self {
        Self {
            status: err.status_label().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(FailureResponse::from(&self))).into_response()
    }
}
