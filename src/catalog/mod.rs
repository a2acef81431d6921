//! # Catalog Module
//!
//! The book catalog domain: record types, the storage abstraction and the
//! service implementing the five operations.
//!
//! # Operations
//!
//! - create: validate, append, read back, report the generated id
//! - list: filter and project to id/name/publisher summaries
//! - get: full record by id
//! - update: validate, replace mutable fields, re-derive `finished`
//! - delete: remove by id
//!
//! Validation order is fixed: missing name first, page range second,
//! existence last.

pub mod book;
pub mod errors;
pub mod filter;
pub mod repository;
pub mod service;

pub use book::{Book, BookInput, BookSummary, BookUpdate};
pub use errors::{CatalogError, CatalogResult};
pub use filter::BookFilter;
pub use repository::{BookRepository, InMemoryBookRepository};
pub use service::CatalogService;
