//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! display-ready strings only; the renderer never looks at `AppState`.

use crate::ui::card::CardView;

/// Rows used by everything except the result grid: blank line, header,
/// border, five-line form, status line, footer border, footer.
pub const CHROME_ROWS: usize = 11;

/// Rows taken by one card including its frame.
pub const CARD_HEIGHT: usize = 6;

/// Blank columns between adjacent cards.
pub const CARD_GAP: usize = 1;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    /// Form inputs in display order.
    pub fields: Vec<FieldView>,
    pub status: StatusView,
    pub grid: GridView,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// One search form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    /// Shown dimmed while `value` is empty.
    pub placeholder: &'static str,
    pub value: String,
    pub is_focused: bool,
}

/// Line between the form and the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    /// Nothing to report.
    Idle,
    /// A search is in flight.
    Loading,
    /// The last search found nothing or failed.
    Error(String),
}

/// Visible part of the result card grid.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Cards per row.
    pub columns: usize,
    /// Width of each card in columns, frame included.
    pub card_width: usize,
    /// Visible card rows, each holding up to `columns` cards.
    pub rows: Vec<Vec<CardView>>,
    /// Card rows scrolled out above the visible window.
    pub hidden_above: usize,
    /// Card rows below the visible window.
    pub hidden_below: usize,
}

impl GridView {
    /// Number of card columns for a terminal width.
    ///
    /// ```
    /// use bookfinder::ui::GridView;
    ///
    /// assert_eq!(GridView::columns_for(50), 1);
    /// assert_eq!(GridView::columns_for(80), 2);
    /// assert_eq!(GridView::columns_for(120), 3);
    /// assert_eq!(GridView::columns_for(200), 4);
    /// ```
    #[must_use]
    pub const fn columns_for(cols: usize) -> usize {
        match cols {
            0..=59 => 1,
            60..=99 => 2,
            100..=139 => 3,
            _ => 4,
        }
    }
}
