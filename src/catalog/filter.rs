//! # List Filters
//!
//! Query-side selection of catalog entries. At most one filter applies per
//! request: `reading` outranks `finished`, which outranks `name`.

use super::book::Book;

/// A resolved list filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// No filtering; every book matches
    All,
    /// Books whose `reading` flag equals the value
    Reading(bool),
    /// Books whose `finished` flag equals the value
    Finished(bool),
    /// Books whose name contains the value, case-insensitively
    NameContains(String),
}

impl BookFilter {
    /// Resolve the filter from raw query values, honoring precedence.
    ///
    /// A boolean parameter that does not parse is treated as absent and
    /// resolution falls through to the next filter in precedence order.
    /// An empty `name` is likewise ignored.
    pub fn from_query(
        reading: Option<&str>,
        finished: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        if let Some(value) = reading.and_then(parse_bool_param) {
            return BookFilter::Reading(value);
        }
        if let Some(value) = finished.and_then(parse_bool_param) {
            return BookFilter::Finished(value);
        }
        if let Some(needle) = name.filter(|n| !n.is_empty()) {
            return BookFilter::NameContains(needle.to_string());
        }
        BookFilter::All
    }

    /// Whether a book passes this filter.
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Reading(value) => book.reading == *value,
            BookFilter::Finished(value) => book.finished == *value,
            BookFilter::NameContains(needle) => {
                book.name.to_lowercase().contains(&needle.to_lowercase())
            }
        }
    }
}

/// Parse a boolean query value: "0"/"1", or "true"/"false" in any case.
fn parse_bool_param(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ if value.eq_ignore_ascii_case("true") => Some(true),
        _ if value.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
