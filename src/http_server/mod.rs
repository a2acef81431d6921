//! # HTTP Server Module
//!
//! Axum transport for the book catalog. Combines the catalog endpoints and
//! the observability endpoints into a unified server.
//!
//! # Endpoints
//!
//! - `POST /books` - Add a book
//! - `GET /books` - List books (filters: `reading`, `finished`, `name`)
//! - `GET /books/{bookId}` - Full record
//! - `PUT /books/{bookId}` - Replace a book
//! - `DELETE /books/{bookId}` - Remove a book
//! - `GET /health` - Health check
//! - `GET /metrics` - Operation counters

pub mod book_routes;
pub mod config;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use book_routes::{book_routes, CatalogState, ListBooksQuery};
pub use config::HttpServerConfig;
pub use response::{
    BookData, BookIdData, BookListData, CreatedResponse, DataResponse, FailureResponse,
    MessageResponse,
};
pub use server::HttpServer;
