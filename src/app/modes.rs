//! Form focus state.
//!
//! The search form has three inputs. Exactly one of them has focus at any
//! time and receives typed characters; Tab and Shift+Tab cycle through them.

/// One of the three search form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Title filter. Focused on start.
    #[default]
    Title,
    /// Author filter.
    Author,
    /// First-publish year filter. Accepts digits only.
    Year,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Year];

    /// Returns the field after this one, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Year,
            Self::Year => Self::Title,
        }
    }

    /// Returns the field before this one, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Year,
            Self::Author => Self::Title,
            Self::Year => Self::Author,
        }
    }

    /// Label shown before the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Year => "Year",
        }
    }

    /// Placeholder shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Search by title",
            Self::Author => "Search by author",
            Self::Year => "Published year",
        }
    }

    /// Whether the field accepts the given character.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Year => c.is_ascii_digit(),
            Self::Title | Self::Author => !c.is_control(),
        }
    }
}
