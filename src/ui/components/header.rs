//! Header component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the bold title bar and returns the next free row.
///
/// The title is centered on a full-width line so an optional `header_bg`
/// fills the whole row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{background}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        centered(&header.title, cols),
        Theme::reset()
    );
    row + 1
}
