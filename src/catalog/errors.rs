//! # Catalog Errors
//!
//! Error taxonomy for catalog operations. Client-visible variants carry the
//! exact localized message of the public contract; the HTTP layer maps each
//! variant to a status code and an envelope label.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // ==================
    // Validation errors (400)
    // ==================
    /// Create payload without a usable name
    #[error("Gagal menambahkan buku. Mohon isi nama buku")]
    AddMissingName,

    /// Create payload whose pages read exceed the page count
    #[error("Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount")]
    AddReadPageExceedsPageCount,

    /// Update payload without a usable name
    #[error("Gagal memperbarui buku. Mohon isi nama buku")]
    UpdateMissingName,

    /// Update payload whose pages read exceed the page count
    #[error("Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount")]
    UpdateReadPageExceedsPageCount,

    // ==================
    // Not found errors (404)
    // ==================
    /// Detail lookup for an id that is not in the catalog
    #[error("Buku tidak ditemukan")]
    BookNotFound,

    /// Update target id is not in the catalog
    #[error("Gagal memperbarui buku. Id tidak ditemukan")]
    UpdateTargetNotFound,

    /// Delete target id is not in the catalog
    #[error("Buku gagal dihapus. Id tidak ditemukan")]
    DeleteTargetNotFound,

    // ==================
    // Internal errors (500)
    // ==================
    /// The post-insert readback did not find the new book
    #[error("Buku gagal ditambahkan")]
    AddFailed,

    /// The catalog storage is unusable (poisoned lock)
    #[error("Terjadi kegagalan pada server kami")]
    Storage,
}

impl CatalogError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::AddMissingName
            | CatalogError::AddReadPageExceedsPageCount
            | CatalogError::UpdateMissingName
            | CatalogError::UpdateReadPageExceedsPageCount => 400,
            CatalogError::BookNotFound
            | CatalogError::UpdateTargetNotFound
            | CatalogError::DeleteTargetNotFound => 404,
            CatalogError::AddFailed | CatalogError::Storage => 500,
        }
    }

    /// Envelope status label: "fail" for client-caused errors, "error" for
    /// server-caused ones
    pub fn status_label(&self) -> &'static str {
        if self.status_code() < 500 {
            "fail"
        } else {
            "error"
        }
    }
}
