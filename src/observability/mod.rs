//! Observability subsystem
//!
//! Structured JSON logging and deterministic counters for the catalog
//! service.
//!
//! # Principles
//!
//! 1. Read-only: observing a request never changes its outcome
//! 2. Synchronous: no background threads, no buffering
//! 3. Deterministic: identical runs render identical output
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::BookCreated, &[("book_id", "abc")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_books_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event with no fields
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::ServerListening);
        log_event(Event::ConfigDefaulted);
    }

    #[test]
    fn test_log_event_with_fields_does_not_panic() {
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("path", "./bookshelf.json"), ("port", "9000")],
        );
        log_event_with_fields(Event::CatalogError, &[("detail", "lock poisoned")]);
    }
}
