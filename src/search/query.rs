//! Query-string and URL construction for the search endpoint.

use crate::domain::SearchQuery;

/// Default Open Library search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Default Open Library cover image host.
pub const DEFAULT_COVER_URL: &str = "https://covers.openlibrary.org";

/// Image shown on cards whose record carries no cover id.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150x200?text=No+Cover";

/// Cover size variant requested from the cover host (medium).
const COVER_SIZE: &str = "M";

/// Endpoints used to build search and cover URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoints {
    /// Search endpoint, without query string.
    pub search_url: String,
    /// Cover image host, without trailing slash.
    pub cover_url: String,
}

impl Default for SearchEndpoints {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            cover_url: DEFAULT_COVER_URL.to_string(),
        }
    }
}

impl SearchEndpoints {
    /// Builds the full search URL for a query.
    ///
    /// ```
    /// use bookfinder::search::SearchEndpoints;
    /// use bookfinder::SearchQuery;
    ///
    /// let url = SearchEndpoints::default().search(&SearchQuery::new("Dune", "", ""));
    /// assert_eq!(url, "https://openlibrary.org/search.json?title=Dune&");
    /// ```
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> String {
        format!("{}?{}", self.search_url, build_query_string(query))
    }

    /// Builds the medium-size cover URL for a cover id.
    #[must_use]
    pub fn cover(&self, cover_id: i64) -> String {
        format!("{}/b/id/{cover_id}-{COVER_SIZE}.jpg", self.cover_url)
    }
}

/// Builds the query string for a search.
///
/// Only non-empty fields are included, always in the order title, author,
/// publish year. Each value is percent-encoded and every pair is followed by
/// `&`, so the result carries a trailing separator.
#[must_use]
pub fn build_query_string(query: &SearchQuery) -> String {
    [
        ("title", &query.title),
        ("author", &query.author),
        ("publish_year", &query.year),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("{key}={}&", urlencoding::encode(value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only() {
        let qs = build_query_string(&SearchQuery::new("Dune", "", ""));
        assert_eq!(qs, "title=Dune&");
        assert!(!qs.contains("author="));
        assert!(!qs.contains("publish_year="));
    }

    #[test]
    fn test_field_order_is_fixed() {
        let qs = build_query_string(&SearchQuery::new("It", "King", "1986"));
        assert_eq!(qs, "title=It&author=King&publish_year=1986&");
    }

    #[test]
    fn test_skips_empty_fields() {
        let qs = build_query_string(&SearchQuery::new("", "Tolkien", "1937"));
        assert_eq!(qs, "author=Tolkien&publish_year=1937&");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let qs = build_query_string(&SearchQuery::new("The Lord & Rings", "J.R.R. Tolkien", ""));
        assert_eq!(qs, "title=The%20Lord%20%26%20Rings&author=J.R.R.%20Tolkien&");
    }

    #[test]
    fn test_empty_query_builds_empty_string() {
        assert_eq!(build_query_string(&SearchQuery::default()), "");
    }

    #[test]
    fn test_cover_url() {
        let url = SearchEndpoints::default().cover(12345);
        assert_eq!(url, "https://covers.openlibrary.org/b/id/12345-M.jpg");
    }

    #[test]
    fn test_custom_search_endpoint() {
        let endpoints = SearchEndpoints {
            search_url: "http://localhost:8080/search.json".to_string(),
            ..Default::default()
        };
        let url = endpoints.search(&SearchQuery::new("", "", "2001"));
        assert_eq!(url, "http://localhost:8080/search.json?publish_year=2001&");
    }
}
