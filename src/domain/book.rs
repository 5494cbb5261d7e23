//! Book search domain types.
//!
//! [`SearchQuery`] holds the three user-entered filters and [`BookSummary`] is
//! the record shape returned by the Open Library search endpoint. Required
//! fields must be present and correctly typed. Optional fields default to
//! `None` and unknown fields are ignored.

use serde::Deserialize;

/// The three optional filter values entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl SearchQuery {
    /// Creates a query from the given field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// Returns `true` when no filter has been entered.
    ///
    /// A search is never dispatched for an empty query.
    ///
    /// ```
    /// use bookfinder::SearchQuery;
    ///
    /// assert!(SearchQuery::default().is_empty());
    /// assert!(!SearchQuery::new("", "", "1937").is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.year.is_empty()
    }
}

/// One search-result record from the book metadata API.
///
/// `key` is the record's unique identity and `title` its display name; both
/// are required. The remaining fields are routinely absent in real responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookSummary {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    #[serde(default)]
    pub cover_i: Option<i64>,
}

impl BookSummary {
    /// Creates a summary with only the required fields set.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author_name: None,
            first_publish_year: None,
            cover_i: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_emptiness() {
        assert!(SearchQuery::new("", "", "").is_empty());
        assert!(!SearchQuery::new("Dune", "", "").is_empty());
        assert!(!SearchQuery::new("", "Herbert", "").is_empty());
    }

    #[test]
    fn test_summary_optional_fields_default() {
        let book: BookSummary =
            serde_json::from_str(r#"{"key": "/works/OL1W", "title": "Dune"}"#).unwrap();
        assert_eq!(book, BookSummary::new("/works/OL1W", "Dune"));
    }

    #[test]
    fn test_summary_ignores_unknown_fields() {
        let book: BookSummary = serde_json::from_str(
            r#"{"key": "k", "title": "t", "edition_count": 12, "language": ["eng"]}"#,
        )
        .unwrap();
        assert_eq!(book.title, "t");
    }

    #[test]
    fn test_summary_rejects_missing_title() {
        let result = serde_json::from_str::<BookSummary>(r#"{"key": "k"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_rejects_mistyped_field() {
        let result =
            serde_json::from_str::<BookSummary>(r#"{"key": "k", "title": "t", "cover_i": "abc"}"#);
        assert!(result.is_err());
    }
}
