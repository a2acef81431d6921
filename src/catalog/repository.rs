//! # Book Repository
//!
//! Storage abstraction over the ordered catalog, plus the in-memory
//! implementation backing the service. The catalog lives exactly as long as
//! the process; nothing is persisted.

use std::sync::RwLock;

use super::book::{Book, BookUpdate};
use super::errors::{CatalogError, CatalogResult};

/// Storage operations over the ordered catalog.
pub trait BookRepository: Send + Sync {
    /// Append a book to the end of the catalog.
    fn insert(&self, book: Book) -> CatalogResult<()>;

    /// Every book, in insertion order.
    fn all(&self) -> CatalogResult<Vec<Book>>;

    /// Find a book by exact id.
    fn find_by_id(&self, id: &str) -> CatalogResult<Option<Book>>;

    /// Replace the mutable fields of the book with this id.
    ///
    /// Returns false when the id is not in the catalog. The lookup and the
    /// mutation run under one write lock so concurrent updates cannot
    /// interleave with each other or with reads.
    fn update(&self, id: &str, update: BookUpdate) -> CatalogResult<bool>;

    /// Remove the book with this id, preserving the order of the rest.
    ///
    /// Returns false when the id is not in the catalog.
    fn remove(&self, id: &str) -> CatalogResult<bool>;
}

/// In-memory catalog storage over a reader-writer lock.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn insert(&self, book: Book) -> CatalogResult<()> {
        let mut books = self.books.write().map_err(|_| CatalogError::Storage)?;
        books.push(book);
        Ok(())
    }

    fn all(&self) -> CatalogResult<Vec<Book>> {
        let books = self.books.read().map_err(|_| CatalogError::Storage)?;
        Ok(books.clone())
    }

    fn find_by_id(&self, id: &str) -> CatalogResult<Option<Book>> {
        let books = self.books.read().map_err(|_| CatalogError::Storage)?;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    fn update(&self, id: &str, update: BookUpdate) -> CatalogResult<bool> {
        let mut books = self.books.write().map_err(|_| CatalogError::Storage)?;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.apply_update(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &str) -> CatalogResult<bool> {
        let mut books = self.books.write().map_err(|_| CatalogError::Storage)?;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
