//! # Book Model
//!
//! Catalog record types: the stored `Book`, the client payload `BookInput`,
//! the update set `BookUpdate`, and the `BookSummary` listing projection.
//!
//! All wire-facing types serialize with camelCase keys. Timestamps render
//! as RFC 3339 strings in UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================
// Stored record
// ==================

/// A catalog entry.
///
/// `finished` is never accepted from clients; it is derived from
/// `read_page == page_count` when the record is created and re-derived on
/// every update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, generated at creation
    pub id: String,
    /// Title, never empty
    pub name: String,
    /// Publication year, omitted from output when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Author, omitted from output when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Synopsis, omitted from output when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Publisher, omitted from output when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Total page count
    pub page_count: u32,
    /// Pages read so far; never exceeds `page_count` for a stored book
    pub read_page: u32,
    /// Whether the book is currently being read
    pub reading: bool,
    /// Derived: `read_page == page_count`
    pub finished: bool,
    /// Set once at creation
    pub inserted_at: DateTime<Utc>,
    /// Equal to `inserted_at` at creation, refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a fresh catalog entry from a payload that already passed
    /// validation.
    ///
    /// Generates the id, stamps both timestamps with the same instant, and
    /// derives `finished` from the effective page values.
    pub fn create(input: BookInput) -> Self {
        let now = Utc::now();
        let page_count = input.page_count.unwrap_or(0);
        let read_page = input.read_page.unwrap_or(0);

        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name.unwrap_or_default(),
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count,
            read_page,
            reading: input.reading.unwrap_or(false),
            finished: read_page == page_count,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields with the update set.
    ///
    /// `id` and `inserted_at` are untouched; everything else, including the
    /// derived `finished` flag and `updated_at`, comes from the update.
    pub fn apply_update(&mut self, update: BookUpdate) {
        self.name = update.name;
        self.year = update.year;
        self.author = update.author;
        self.summary = update.summary;
        self.publisher = update.publisher;
        self.page_count = update.page_count;
        self.read_page = update.read_page;
        self.reading = update.reading;
        self.finished = update.finished;
        self.updated_at = update.updated_at;
    }
}

// ==================
// Client payload
// ==================

/// Client payload for create and update requests.
///
/// Every field is optional at the wire level so that validation, not
/// deserialization, decides how a bad payload is reported. Absent numeric
/// fields count as zero and an absent `reading` counts as false.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

impl BookInput {
    /// First validation rule: `name` must be present and non-empty.
    pub fn name_is_present(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Second validation rule: pages read may not exceed the page count.
    /// Absent fields count as zero.
    pub fn read_page_exceeds_page_count(&self) -> bool {
        self.read_page.unwrap_or(0) > self.page_count.unwrap_or(0)
    }
}

// ==================
// Update set
// ==================

/// The full mutable field set applied to a stored book in one step.
///
/// Built from a validated payload so the repository can swap every field
/// under a single write lock without re-running validation.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
    pub finished: bool,
    pub updated_at: DateTime<Utc>,
}

impl BookUpdate {
    /// Build the update set from a validated payload, stamping the update
    /// time and re-deriving `finished`.
    pub fn from_input(input: BookInput) -> Self {
        let page_count = input.page_count.unwrap_or(0);
        let read_page = input.read_page.unwrap_or(0);

        Self {
            name: input.name.unwrap_or_default(),
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count,
            read_page,
            reading: input.reading.unwrap_or(false),
            finished: read_page == page_count,
            updated_at: Utc::now(),
        }
    }
}

// ==================
// Listing projection
// ==================

/// Reduced listing view of a book: id, name and publisher only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}
