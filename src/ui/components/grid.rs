//! Result card grid renderer.
//!
//! Each card is a framed block of [`CARD_HEIGHT`] rows:
//!
//! ```text
//! ┌────────────────────────┐
//! │ The Hobbit             │
//! │ J.R.R. Tolkien         │
//! │ First Published: 1937  │
//! │ https://covers.open... │
//! └────────────────────────┘
//! ```

use crate::ui::card::CardView;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridView, CARD_GAP, CARD_HEIGHT};

/// Renders the visible card rows and returns the next free row.
pub fn render_grid(row: usize, grid: &GridView, theme: &Theme) -> usize {
    let mut current_row = row;
    for cards in &grid.rows {
        for (index, card) in cards.iter().enumerate() {
            let col = 1 + index * (grid.card_width + CARD_GAP);
            render_card(current_row, col, card, grid.card_width, theme);
        }
        current_row += CARD_HEIGHT;
    }
    current_row
}

fn render_card(row: usize, col: usize, card: &CardView, width: usize, theme: &Theme) {
    let inner_width = width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.card_border);

    position_cursor(row, col);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let year = format!("First Published: {}", card.year);
    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.card_title_fg));
    let lines = [
        (title_style, card.title.as_str()),
        (Theme::fg(&theme.colors.text_normal), card.authors.as_str()),
        (Theme::fg(&theme.colors.text_dim), year.as_str()),
        (Theme::fg(&theme.colors.link_fg), card.image_url.as_str()),
    ];

    for (offset, (style, text)) in lines.iter().enumerate() {
        position_cursor(row + 1 + offset, col);
        print!("{border}│{}", Theme::reset());
        print!(" {style}{}{} ", fit(text, text_width), Theme::reset());
        print!("{border}│{}", Theme::reset());
    }

    position_cursor(row + CARD_HEIGHT - 1, col);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}

/// Label for the card rows outside the visible window, if any.
#[must_use]
pub fn scroll_indicator(grid: &GridView) -> Option<String> {
    match (grid.hidden_above, grid.hidden_below) {
        (0, 0) => None,
        (above, 0) => Some(format!(" ↑ {above} more ")),
        (0, below) => Some(format!(" ↓ {below} more ")),
        (above, below) => Some(format!(" ↑ {above}  ↓ {below} more ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(hidden_above: usize, hidden_below: usize) -> GridView {
        GridView {
            columns: 2,
            card_width: 39,
            rows: Vec::new(),
            hidden_above,
            hidden_below,
        }
    }

    #[test]
    fn test_scroll_indicator() {
        assert_eq!(scroll_indicator(&grid(0, 0)), None);
        assert_eq!(scroll_indicator(&grid(2, 0)).as_deref(), Some(" ↑ 2 more "));
        assert_eq!(scroll_indicator(&grid(0, 3)).as_deref(), Some(" ↓ 3 more "));
        assert_eq!(scroll_indicator(&grid(1, 4)).as_deref(), Some(" ↑ 1  ↓ 4 more "));
    }
}
