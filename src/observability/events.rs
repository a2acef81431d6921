//! Observable events
//!
//! Every log line the service emits names one of these events. Events are
//! explicit and typed; the wire name is SCREAMING_SNAKE.

use std::fmt;

use super::logger::Severity;

/// Observable service events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration file loaded
    ConfigLoaded,
    /// Configuration file absent, defaults in use
    ConfigDefaulted,
    /// Listener bound, serving requests
    ServerListening,

    // Catalog operations
    /// A book was added to the catalog
    BookCreated,
    /// A stored book was replaced
    BookUpdated,
    /// A book was removed from the catalog
    BookDeleted,
    /// A payload failed validation
    BookRejected,
    /// A catalog operation failed server-side
    CatalogError,
}

impl Event {
    /// Returns the wire name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigDefaulted => "CONFIG_DEFAULTED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::BookRejected => "BOOK_REJECTED",
            Event::CatalogError => "CATALOG_ERROR",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::BookRejected => Severity::Warn,
            Event::CatalogError => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::ConfigDefaulted,
            Event::ServerListening,
            Event::BookCreated,
            Event::BookUpdated,
            Event::BookDeleted,
            Event::BookRejected,
            Event::CatalogError,
        ];
        for event in events {
            let name = event.as_str();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severities() {
        assert_eq!(Event::BookCreated.severity(), Severity::Info);
        assert_eq!(Event::BookRejected.severity(), Severity::Warn);
        assert_eq!(Event::CatalogError.severity(), Severity::Error);
    }

    #[test]
    fn test_event_display_matches_as_str() {
        assert_eq!(Event::ServerListening.to_string(), "SERVER_LISTENING");
    }
}
