//! Shared rendering utilities.
//!
//! Widths are counted in `char`s. Book titles and author names routinely
//! contain non-ASCII text, so byte lengths would misalign card frames and
//! byte slicing could split a character.

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// ```
/// use bookfinder::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Hobbit", 20), "The Hobbit");
/// assert_eq!(truncate("The Fellowship of the Ring", 10), "The Fel...");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut short: String = text.chars().take(width - 3).collect();
    short.push_str("...");
    short
}

/// Truncates `text` to `width` and pads it with spaces to exactly `width`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let short = truncate(text, width);
    let padding = width.saturating_sub(short.chars().count());
    format!("{short}{}", " ".repeat(padding))
}

/// Centers `text` in a line of exactly `width` characters, truncating it if
/// it does not fit. Odd leftover space goes to the right.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let short = truncate(text, width);
    let len = short.chars().count();
    let left = (width - len) / 2;
    format!("{}{short}{}", " ".repeat(left), " ".repeat(width - len - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Éléments", 8), "Éléments");
        assert_eq!(truncate("Éléments de géométrie", 8), "Éléme...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("Dune", 2), "Du");
        assert_eq!(truncate("Dune", 0), "");
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 5), "ab...");
        assert_eq!(fit("ä", 3).chars().count(), 3);
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("ab", 5), " ab  ");
        assert_eq!(centered("Loading...", 7), "Load...");
        assert_eq!(centered("", 3), "   ");
    }
}
