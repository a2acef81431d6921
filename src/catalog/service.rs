//! # Catalog Service
//!
//! The five catalog operations: create, list, retrieve, update and delete.
//! Validation runs here, before any storage access, so failures carry the
//! operation-specific localized message. Storage is reached only through
//! the injected repository.

use std::sync::Arc;

use super::book::{Book, BookInput, BookSummary, BookUpdate};
use super::errors::{CatalogError, CatalogResult};
use super::filter::BookFilter;
use super::repository::BookRepository;

/// Catalog operations over an injected repository.
pub struct CatalogService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> CatalogService<R> {
    /// Create a service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the payload, append the book and return its generated id.
    ///
    /// The name rule is checked before the page rule, so a payload failing
    /// both reports the missing name. The appended book is read back before
    /// the id is reported.
    pub fn create_book(&self, input: BookInput) -> CatalogResult<String> {
        if !input.name_is_present() {
            return Err(CatalogError::AddMissingName);
        }
        if input.read_page_exceeds_page_count() {
            return Err(CatalogError::AddReadPageExceedsPageCount);
        }

        let book = Book::create(input);
        let id = book.id.clone();
        self.repository.insert(book)?;

        if self.repository.find_by_id(&id)?.is_none() {
            return Err(CatalogError::AddFailed);
        }
        Ok(id)
    }

    /// Books passing the filter, projected for listing, in insertion order.
    pub fn list_books(&self, filter: &BookFilter) -> CatalogResult<Vec<BookSummary>> {
        let books = self.repository.all()?;
        Ok(books
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect())
    }

    /// The full record for this id.
    pub fn get_book(&self, id: &str) -> CatalogResult<Book> {
        self.repository
            .find_by_id(id)?
            .ok_or(CatalogError::BookNotFound)
    }

    /// Validate the payload and replace the mutable fields of an existing
    /// book.
    ///
    /// Validation runs before the existence check, so an invalid payload
    /// against an unknown id reports the validation failure, not the
    /// missing id.
    pub fn update_book(&self, id: &str, input: BookInput) -> CatalogResult<()> {
        if !input.name_is_present() {
            return Err(CatalogError::UpdateMissingName);
        }
        if input.read_page_exceeds_page_count() {
            return Err(CatalogError::UpdateReadPageExceedsPageCount);
        }

        let update = BookUpdate::from_input(input);
        if !self.repository.update(id, update)? {
            return Err(CatalogError::UpdateTargetNotFound);
        }
        Ok(())
    }

    /// Remove the book with this id.
    pub fn delete_book(&self, id: &str) -> CatalogResult<()> {
        if !self.repository.remove(id)? {
            return Err(CatalogError::DeleteTargetNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::repository::InMemoryBookRepository;
    use super::*;

    fn service() -> CatalogService<InMemoryBookRepository> {
        CatalogService::new(InMemoryBookRepository::new())
    }

    fn named(name: &str) -> BookInput {
        BookInput {
            name: Some(name.to_string()),
            ..BookInput::default()
        }
    }

    #[test]
    fn test_create_returns_id_of_stored_book() {
        let service = service();
        let id = service.create_book(named("Judul")).unwrap();

        let book = service.get_book(&id).unwrap();
        assert_eq!(book.name, "Judul");
    }

    #[test]
    fn test_create_rejects_missing_name() {
        let result = service().create_book(BookInput::default());
        assert!(matches!(result, Err(CatalogError::AddMissingName)));
    }

    #[test]
    fn test_create_rejects_read_page_over_page_count() {
        let input = BookInput {
            page_count: Some(10),
            read_page: Some(11),
            ..named("Judul")
        };
        let result = service().create_book(input);
        assert!(matches!(
            result,
            Err(CatalogError::AddReadPageExceedsPageCount)
        ));
    }

    #[test]
    fn test_create_checks_name_before_pages() {
        // Fails both rules; the name message wins
        let input = BookInput {
            page_count: Some(10),
            read_page: Some(11),
            ..BookInput::default()
        };
        let result = service().create_book(input);
        assert!(matches!(result, Err(CatalogError::AddMissingName)));
    }

    #[test]
    fn test_rejected_create_stores_nothing() {
        let service = service();
        let _ = service.create_book(BookInput::default());
        assert!(service.list_books(&BookFilter::All).unwrap().is_empty());
    }

    #[test]
    fn test_list_projects_summaries_in_insertion_order() {
        let service = service();
        service.create_book(named("A")).unwrap();
        service.create_book(named("B")).unwrap();

        let books = service.list_books(&BookFilter::All).unwrap();
        let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_list_applies_filter() {
        let service = service();
        service
            .create_book(BookInput {
                reading: Some(true),
                ..named("Sedang dibaca")
            })
            .unwrap();
        service.create_book(named("Belum dibaca")).unwrap();

        let books = service.list_books(&BookFilter::Reading(true)).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Sedang dibaca");
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let result = service().get_book("no-such-id");
        assert!(matches!(result, Err(CatalogError::BookNotFound)));
    }

    #[test]
    fn test_update_replaces_fields_and_rederives_finished() {
        let service = service();
        let id = service
            .create_book(BookInput {
                page_count: Some(100),
                read_page: Some(10),
                ..named("Judul")
            })
            .unwrap();

        service
            .update_book(
                &id,
                BookInput {
                    page_count: Some(100),
                    read_page: Some(100),
                    ..named("Judul Baru")
                },
            )
            .unwrap();

        let book = service.get_book(&id).unwrap();
        assert_eq!(book.name, "Judul Baru");
        assert!(book.finished);
    }

    #[test]
    fn test_update_rejects_missing_name() {
        let service = service();
        let id = service.create_book(named("Judul")).unwrap();

        let result = service.update_book(&id, BookInput::default());
        assert!(matches!(result, Err(CatalogError::UpdateMissingName)));

        // The stored book is untouched
        assert_eq!(service.get_book(&id).unwrap().name, "Judul");
    }

    #[test]
    fn test_update_validation_runs_before_existence_check() {
        let result = service().update_book("no-such-id", BookInput::default());
        assert!(matches!(result, Err(CatalogError::UpdateMissingName)));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let result = service().update_book("no-such-id", named("Judul"));
        assert!(matches!(result, Err(CatalogError::UpdateTargetNotFound)));
    }

    #[test]
    fn test_delete_removes_book() {
        let service = service();
        let id = service.create_book(named("Judul")).unwrap();

        service.delete_book(&id).unwrap();
        assert!(matches!(
            service.get_book(&id),
            Err(CatalogError::BookNotFound)
        ));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let result = service().delete_book("no-such-id");
        assert!(matches!(result, Err(CatalogError::DeleteTargetNotFound)));
    }

    #[test]
    fn test_delete_is_not_idempotent() {
        let service = service();
        let id = service.create_book(named("Judul")).unwrap();

        service.delete_book(&id).unwrap();
        let again = service.delete_book(&id);
        assert!(matches!(again, Err(CatalogError::DeleteTargetNotFound)));
    }
}
