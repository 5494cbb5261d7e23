//! Status line renderer: loading indicator or error message.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusView;

const LOADING_TEXT: &str = "Loading...";

/// Renders the status line and returns the next free row.
///
/// An idle status still writes a blank line over whatever was there.
pub fn render_status(row: usize, status: &StatusView, theme: &Theme, cols: usize) -> usize {
    let (text, color) = match status {
        StatusView::Idle => ("", &theme.colors.text_normal),
        StatusView::Loading => (LOADING_TEXT, &theme.colors.loading_fg),
        StatusView::Error(message) => (message.as_str(), &theme.colors.error_fg),
    };

    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), centered(text, cols), Theme::reset());
    row + 1
}
