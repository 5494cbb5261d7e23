//! Result card derivation.
//!
//! A [`CardView`] is the display form of one [`BookSummary`]. The mapping is
//! pure and total: every optional field has a fallback, so any summary that
//! passed response validation can be rendered. Text from the API is printed
//! straight to the terminal, so control characters are stripped here.

use crate::domain::BookSummary;
use crate::search::{SearchEndpoints, PLACEHOLDER_COVER_URL};

/// Shown when a record lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Shown when a record has no first-publish year.
pub const UNKNOWN_YEAR: &str = "N/A";

/// Display-ready fields of one result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Record identity, unique within a result list.
    pub key: String,
    pub title: String,
    /// Authors joined with `", "`, or [`UNKNOWN_AUTHOR`].
    pub authors: String,
    /// First-publish year, or [`UNKNOWN_YEAR`].
    pub year: String,
    /// Cover image URL, or the placeholder image.
    pub image_url: String,
}

impl CardView {
    /// Derives the card for a book summary.
    ///
    /// A cover id or year of zero counts as absent.
    ///
    /// ```
    /// use bookfinder::search::SearchEndpoints;
    /// use bookfinder::ui::card::CardView;
    /// use bookfinder::BookSummary;
    ///
    /// let mut book = BookSummary::new("/works/OL1W", "Dune");
    /// book.cover_i = Some(12345);
    /// let card = CardView::from_book(&book, &SearchEndpoints::default());
    /// assert!(card.image_url.ends_with("/12345-M.jpg"));
    /// assert_eq!(card.authors, "Unknown Author");
    /// ```
    #[must_use]
    pub fn from_book(book: &BookSummary, endpoints: &SearchEndpoints) -> Self {
        let image_url = match book.cover_i {
            Some(id) if id != 0 => endpoints.cover(id),
            _ => PLACEHOLDER_COVER_URL.to_string(),
        };

        let authors = match book.author_name.as_deref() {
            Some(names) if !names.is_empty() => printable(&names.join(", ")),
            _ => UNKNOWN_AUTHOR.to_string(),
        };

        let year = match book.first_publish_year {
            Some(year) if year != 0 => year.to_string(),
            _ => UNKNOWN_YEAR.to_string(),
        };

        Self {
            key: book.key.clone(),
            title: printable(&book.title),
            authors,
            year,
            image_url,
        }
    }
}

/// Drops control characters, including ESC, so API text cannot emit
/// terminal escape sequences.
fn printable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
