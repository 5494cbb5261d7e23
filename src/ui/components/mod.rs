//! Composable UI component renderers.
//!
//! Each component draws one band of the screen at a given row and returns
//! the next free row, so [`render_layout`] can stack them top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`form`]: Title, author and year inputs
//! - [`status`]: Loading indicator or error message
//! - [`grid`]: Result cards
//! - [`footer`]: Keybinding hints

mod footer;
mod form;
mod grid;
mod header;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use form::render_form;
use grid::{render_grid, scroll_indicator};
use header::render_header;
use status::render_status;

/// Renders a horizontal border line, with an optional right-aligned label.
fn render_border(row: usize, color: &str, cols: usize, label: Option<&str>) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    match label {
        Some(label) if label.chars().count() + 2 <= cols => {
            let len = label.chars().count();
            print!("{}{label}──", "─".repeat(cols - len - 2));
        }
        _ => print!("{}", "─".repeat(cols)),
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Form - 5 lines]
/// [Status]
/// [Card rows]
/// [Border with scroll indicator]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols, None);
    current_row = render_form(current_row, &vm.fields, theme, cols);
    current_row = render_status(current_row, &vm.status, theme, cols);
    let _current_row = render_grid(current_row, &vm.grid, theme);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    let indicator = scroll_indicator(&vm.grid);
    render_border(border_row, &theme.colors.border, cols, indicator.as_deref());
    render_footer(footer_row, &vm.footer, theme, cols);
}
