//! Metrics registry
//!
//! Counters only: monotonic within a process, reset at startup, readable
//! without locks. Rendering is deterministic so two identical runs produce
//! identical metrics output.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the catalog service
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    list_requests: AtomicU64,
    detail_requests: AtomicU64,
    validation_failures: AtomicU64,
    not_found_responses: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the created-books counter
    pub fn increment_books_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the updated-books counter
    pub fn increment_books_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the deleted-books counter
    pub fn increment_books_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the list-requests counter
    pub fn increment_list_requests(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the detail-requests counter
    pub fn increment_detail_requests(&self) {
        self.detail_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the rejected-payloads counter
    pub fn increment_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the unknown-id counter
    pub fn increment_not_found_responses(&self) {
        self.not_found_responses.fetch_add(1, Ordering::Relaxed);
    }

    /// Render all counters as a JSON object with fixed key order
    pub fn to_json(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            concat!(
                "{{\"books_created\":{},\"books_updated\":{},\"books_deleted\":{},",
                "\"list_requests\":{},\"detail_requests\":{},",
                "\"validation_failures\":{},\"not_found_responses\":{}}}"
            ),
            snapshot.books_created,
            snapshot.books_updated,
            snapshot.books_deleted,
            snapshot.list_requests,
            snapshot.detail_requests,
            snapshot.validation_failures,
            snapshot.not_found_responses,
        )
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            list_requests: self.list_requests.load(Ordering::Relaxed),
            detail_requests: self.detail_requests.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            not_found_responses: self.not_found_responses.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub list_requests: u64,
    pub detail_requests: u64,
    pub validation_failures: u64,
    pub not_found_responses: u64,
}
