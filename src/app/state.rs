//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the search form,
//! the search lifecycle (results, loading flag, error message), the request
//! sequence guard, and the scroll position of the result grid. It is mutated
//! only through the event handler; the renderer reads it through the
//! immutable [`UIViewModel`](crate::ui::viewmodel::UIViewModel) snapshot.
//!
//! # Request Sequencing
//!
//! Every dispatched search gets the next value of a monotonic counter and
//! becomes the one in-flight request. A completion is applied only if its id
//! matches the in-flight id, so a slow earlier response can never overwrite
//! the results of a later search.
//!
//! # Web Access
//!
//! Requests go through the host, which needs the `WebAccess` permission. A
//! search submitted before the user answers the permission prompt is held
//! back and sent once access is granted; after a denial every search fails
//! straight away instead of waiting for a response that never comes.

use super::modes::FormField;
use crate::domain::{BookSummary, BookfinderError, Result, SearchQuery};
use crate::search::{SearchEndpoints, MAX_RESULTS};
use crate::ui::card::CardView;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FieldView, FooterInfo, GridView, HeaderInfo, StatusView, UIViewModel, CARD_GAP, CARD_HEIGHT,
    CHROME_ROWS,
};
use chrono::{DateTime, Utc};

/// Shown when a search succeeds with zero documents.
pub const NO_RESULTS_MESSAGE: &str = "No books found.";

/// Shown for every failed search, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data.";

const HEADER_TITLE: &str = " Book Finder ";

const KEY_HINTS: &str =
    "Tab/S-Tab: field  Enter: search  Up/Down: scroll  Ctrl+u: clear  Esc: close";

/// Current contents of the three search inputs and which one has focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub year: String,
    pub focus: FormField,
}

impl FormState {
    /// Snapshot of the field values as a search query.
    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.title.clone(), self.author.clone(), self.year.clone())
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Year => &self.year,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Year => &mut self.year,
        }
    }

    /// Appends a character to the focused field.
    ///
    /// Returns `false` when the field rejects the character.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.focus.accepts(c) {
            return false;
        }
        self.focused_mut().push(c);
        true
    }

    /// Removes the last character of the focused field.
    ///
    /// Returns `false` when the field was already empty.
    pub fn pop_char(&mut self) -> bool {
        self.focused_mut().pop().is_some()
    }

    /// Clears the focused field. Returns `false` when it was already empty.
    pub fn clear_focused(&mut self) -> bool {
        let value = self.focused_mut();
        if value.is_empty() {
            return false;
        }
        value.clear();
        true
    }
}

/// Outcome of the most recent search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// At most [`MAX_RESULTS`] summaries, in API order.
    pub results: Vec<BookSummary>,
    /// True only while the latest search is unresolved.
    pub is_loading: bool,
    /// Empty when there is nothing to report.
    pub error_message: String,
}

/// Host answer to the plugin's web access permission request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WebAccess {
    /// Not answered yet.
    #[default]
    Pending,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlightRequest {
    id: u64,
    dispatched_at: DateTime<Utc>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search form inputs.
    pub form: FormState,

    /// Results, loading flag and error message of the latest search.
    pub search: SearchState,

    /// Index of the first visible card row in the result grid.
    ///
    /// Bounded by the pane size of the last render.
    pub scroll_row: usize,

    /// Whether the host lets the plugin issue web requests.
    pub web_access: WebAccess,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Endpoints used for search and cover URLs.
    pub endpoints: SearchEndpoints,

    next_request_id: u64,
    in_flight: Option<InFlightRequest>,
    /// Search held back until web access is answered.
    deferred_fetch: Option<(u64, String)>,

    /// Pane size of the last render, `(rows, cols)`.
    viewport: (usize, usize),
}

/// Card-grid dimensions for one pane size and result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridMetrics {
    columns: usize,
    total_rows: usize,
    visible_rows: usize,
}

impl GridMetrics {
    fn new(rows: usize, cols: usize, cards: usize) -> Self {
        let columns = GridView::columns_for(cols);
        Self {
            columns,
            total_rows: cards.div_ceil(columns),
            visible_rows: (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1),
        }
    }

    /// Largest first-visible row that still fills the window.
    const fn max_first_row(self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

impl AppState {
    /// Creates an empty state: blank form focused on the title, no results.
    #[must_use]
    pub fn new(theme: Theme, endpoints: SearchEndpoints) -> Self {
        Self {
            form: FormState::default(),
            search: SearchState::default(),
            scroll_row: 0,
            web_access: WebAccess::Pending,
            theme,
            endpoints,
            next_request_id: 1,
            in_flight: None,
            deferred_fetch: None,
            viewport: (0, 0),
        }
    }

    /// Id of the search currently awaited, if any.
    #[must_use]
    pub fn in_flight_request(&self) -> Option<u64> {
        self.in_flight.map(|request| request.id)
    }

    /// Starts a search with the current form values.
    ///
    /// Returns `None` without touching any state when every field is empty.
    /// Otherwise clears the previous outcome, marks the search as loading,
    /// makes it the only request whose response will be accepted, and
    /// returns its id together with the URL to fetch.
    pub fn begin_search(&mut self) -> Option<(u64, String)> {
        let query = self.form.query();
        if query.is_empty() {
            return None;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;

        if let Some(previous) = self.in_flight {
            tracing::debug!(
                superseded_request = previous.id,
                request_id = id,
                "superseding in-flight search"
            );
        }

        self.in_flight = Some(InFlightRequest {
            id,
            dispatched_at: Utc::now(),
        });
        self.search.is_loading = true;
        self.search.error_message.clear();
        self.search.results.clear();
        self.scroll_row = 0;

        Some((id, self.endpoints.search(&query)))
    }

    /// Applies the outcome of a search if it is the latest one dispatched.
    ///
    /// Returns `false` and leaves the state untouched for stale or unknown
    /// request ids.
    pub fn complete_search(&mut self, request_id: u64, outcome: Result<Vec<BookSummary>>) -> bool {
        let Some(in_flight) = self.in_flight else {
            tracing::debug!(request_id = request_id, "no search in flight, discarding response");
            return false;
        };

        if in_flight.id != request_id {
            tracing::debug!(
                request_id = request_id,
                latest_request = in_flight.id,
                "discarding stale search response"
            );
            return false;
        }

        let elapsed_ms = (Utc::now() - in_flight.dispatched_at).num_milliseconds();
        self.in_flight = None;
        self.search.is_loading = false;

        match outcome {
            Ok(books) => {
                tracing::debug!(
                    request_id = request_id,
                    result_count = books.len(),
                    elapsed_ms = elapsed_ms,
                    "search completed"
                );
                if books.is_empty() {
                    self.search.error_message = NO_RESULTS_MESSAGE.to_string();
                }
                self.search.results = books.into_iter().take(MAX_RESULTS).collect();
            }
            Err(e) => {
                tracing::debug!(
                    request_id = request_id,
                    error = %e,
                    elapsed_ms = elapsed_ms,
                    "search failed"
                );
                self.search.error_message = FETCH_FAILED_MESSAGE.to_string();
                self.search.results.clear();
            }
        }

        true
    }

    /// True while a search waits for the web access answer.
    #[must_use]
    pub const fn has_deferred_fetch(&self) -> bool {
        self.deferred_fetch.is_some()
    }

    /// Holds a started search back until web access is answered.
    ///
    /// Replaces any search deferred earlier; only the latest one is kept.
    pub fn defer_fetch(&mut self, request_id: u64, url: String) {
        tracing::debug!(request_id = request_id, "web access pending, deferring search");
        self.deferred_fetch = Some((request_id, url));
    }

    /// Fails a started search because web access was denied.
    pub fn reject_search(&mut self, request_id: u64) -> bool {
        self.complete_search(request_id, Err(BookfinderError::WebAccessDenied))
    }

    /// Records the host's answer to the web access request.
    ///
    /// Returns the deferred search when access was granted. After a denial the
    /// deferred search is failed instead and `None` is returned.
    pub fn resolve_web_access(&mut self, granted: bool) -> Option<(u64, String)> {
        self.web_access = if granted { WebAccess::Granted } else { WebAccess::Denied };
        let (request_id, url) = self.deferred_fetch.take()?;
        if granted {
            return Some((request_id, url));
        }
        self.reject_search(request_id);
        None
    }

    /// Records the pane size used by the next render.
    ///
    /// Scrolling is bounded by this size, so a shrinking result window never
    /// leaves `scroll_row` past the last reachable position.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
        self.scroll_row = self.scroll_row.min(self.grid_metrics().max_first_row());
    }

    fn grid_metrics(&self) -> GridMetrics {
        let (rows, cols) = self.viewport;
        GridMetrics::new(rows, cols, self.search.results.len())
    }

    /// Scrolls the result grid down by one card row.
    ///
    /// Returns `false` once the last card row is already visible.
    pub fn scroll_down(&mut self) -> bool {
        if self.scroll_row >= self.grid_metrics().max_first_row() {
            return false;
        }
        self.scroll_row += 1;
        true
    }

    /// Scrolls the result grid up by one card row.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_row == 0 {
            return false;
        }
        self.scroll_row -= 1;
        true
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Cards are laid out left to right in a grid whose column count follows
    /// the terminal width. Only the card rows that fit below the form are
    /// included, starting at the (clamped) scroll position.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let metrics = GridMetrics::new(rows, cols, self.search.results.len());
        let columns = metrics.columns;
        let card_width = cols.saturating_sub(CARD_GAP * (columns - 1)) / columns;

        let cards: Vec<CardView> = self
            .search
            .results
            .iter()
            .map(|book| CardView::from_book(book, &self.endpoints))
            .collect();

        let total_rows = metrics.total_rows;
        let first_row = self.scroll_row.min(metrics.max_first_row());
        let last_row = (first_row + metrics.visible_rows).min(total_rows);

        let grid_rows: Vec<Vec<CardView>> = cards
            .chunks(columns)
            .skip(first_row)
            .take(last_row - first_row)
            .map(<[CardView]>::to_vec)
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: HEADER_TITLE.to_string(),
            },
            fields: self.compute_fields(),
            status: self.compute_status(),
            grid: GridView {
                columns,
                card_width,
                rows: grid_rows,
                hidden_above: first_row,
                hidden_below: total_rows - last_row,
            },
            footer: FooterInfo {
                keybindings: KEY_HINTS.to_string(),
            },
        }
    }

    fn compute_fields(&self) -> Vec<FieldView> {
        FormField::ALL
            .iter()
            .map(|&field| FieldView {
                label: field.label(),
                placeholder: field.placeholder(),
                value: self.form.value(field).to_string(),
                is_focused: self.form.focus == field,
            })
            .collect()
    }

    fn compute_status(&self) -> StatusView {
        if self.search.is_loading {
            StatusView::Loading
        } else if self.search.error_message.is_empty() {
            StatusView::Idle
        } else {
            StatusView::Error(self.search.error_message.clone())
        }
    }
}
