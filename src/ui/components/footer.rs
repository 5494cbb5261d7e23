//! Footer component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints, dimmed, and returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        centered(&footer.keybindings, cols),
        Theme::reset()
    );
    row + 1
}
