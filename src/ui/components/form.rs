//! Search form component renderer.
//!
//! Draws the three inputs inside one frame, one per line. The focused input
//! gets a marker and a cursor; empty inputs show their placeholder dimmed.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FieldView;

/// Horizontal margin around the form frame.
const FORM_MARGIN: usize = 5;

/// Width of the `Label:` column including its trailing space.
const LABEL_WIDTH: usize = 8;

/// Renders the form frame and its fields, returning the next free row.
///
/// ```text
/// [margin] ┌──────────────────────────────┐
/// [margin] │ › Title:  dune_              │
/// [margin] │   Author: Search by author   │
/// [margin] │   Year:   Published year     │
/// [margin] └──────────────────────────────┘
/// ```
pub fn render_form(row: usize, fields: &[FieldView], theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FORM_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    // " › " marker, label column, one cell for the cursor
    let text_width = inner_width.saturating_sub(3 + LABEL_WIDTH + 1);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FORM_MARGIN));
    print!("{}", Theme::fg(&theme.colors.field_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for field in fields {
        render_field(current_row, field, theme, text_width);
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(FORM_MARGIN));
    print!("{}", Theme::fg(&theme.colors.field_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    current_row + 1
}

fn render_field(row: usize, field: &FieldView, theme: &Theme, text_width: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FORM_MARGIN));
    print!("{}│", Theme::fg(&theme.colors.field_border));

    if field.is_focused {
        print!("{}{} › ", Theme::bold(), Theme::fg(&theme.colors.field_focus_fg));
    } else {
        print!("{}   ", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", fit(&format!("{}:", field.label), LABEL_WIDTH));
    print!("{}", Theme::reset());

    if field.value.is_empty() {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(field.placeholder, text_width));
    } else {
        // Keep the tail visible while typing past the edge.
        let skip = field.value.chars().count().saturating_sub(text_width);
        let visible: String = field.value.chars().skip(skip).collect();
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(&visible, text_width));
    }
    print!("{}", Theme::reset());

    if field.is_focused {
        print!("{}_", Theme::fg(&theme.colors.field_focus_fg));
    } else {
        print!(" ");
    }

    print!("{}│", Theme::fg(&theme.colors.field_border));
    print!("{}", Theme::reset());
}
