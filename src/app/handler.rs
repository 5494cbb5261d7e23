//! Event handling and state transition logic.
//!
//! [`handle_event`] is the reducer of the application: it takes the current
//! [`AppState`] and one [`Event`], applies the transition, and returns whether
//! the UI should re-render plus the side effects to run.
//!
//! # Event Types
//!
//! - **Form**: `Char`, `Backspace`, `ClearField`, `NextField`, `PrevField`
//! - **Search**: `Submit`, `SearchResponse`, `WebAccess`
//! - **Results**: `ScrollDown`, `ScrollUp`
//! - **Plugin**: `Close`
//!
//! # Example
//!
//! ```rust
//! use bookfinder::{handle_event, Action, AppState, Event, Theme};
//! use bookfinder::search::SearchEndpoints;
//!
//! let mut state = AppState::new(Theme::default(), SearchEndpoints::default());
//! handle_event(&mut state, &Event::WebAccess { granted: true })?;
//! for c in "Dune".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions[0], Action::FetchSearch { request_id: 1, .. }));
//! # Ok::<(), bookfinder::BookfinderError>(())
//! ```

use crate::app::{Action, AppState, WebAccess};
use crate::domain::error::Result;
use crate::search;

/// Events triggered by user input or by completed web requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Clears the focused field.
    ClearField,
    /// Moves focus to the next field.
    NextField,
    /// Moves focus to the previous field.
    PrevField,
    /// Submits the search with the current field values.
    Submit,
    /// Scrolls the result grid down one card row.
    ScrollDown,
    /// Scrolls the result grid up one card row.
    ScrollUp,
    /// Hides the plugin.
    Close,

    /// Reports the result of a dispatched search request.
    SearchResponse {
        /// Sequence number the request was tagged with.
        request_id: u64,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Reports the user's answer to the web access permission prompt.
    WebAccess {
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Search failures are never returned; they are folded into the state's error
/// message. The `Result` is kept for transitions that may fail in the shim.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Char(c) => {
            let changed = state.form.push_char(*c);
            if !changed {
                tracing::trace!(char = %c, field = ?state.form.focus, "character rejected");
            }
            Ok((changed, vec![]))
        }
        Event::Backspace => Ok((state.form.pop_char(), vec![])),
        Event::ClearField => Ok((state.form.clear_focused(), vec![])),
        Event::NextField => {
            state.form.focus = state.form.focus.next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            state.form.focus = state.form.focus.prev();
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Some((request_id, url)) = state.begin_search() else {
                tracing::debug!("all fields empty, ignoring submit");
                return Ok((false, vec![]));
            };

            match state.web_access {
                WebAccess::Granted => {
                    tracing::debug!(request_id = request_id, url = %url, "dispatching search");
                    Ok((true, vec![Action::FetchSearch { url, request_id }]))
                }
                WebAccess::Pending => {
                    state.defer_fetch(request_id, url);
                    Ok((true, vec![]))
                }
                WebAccess::Denied => {
                    tracing::debug!(request_id = request_id, "web access denied, failing search");
                    Ok((state.reject_search(request_id), vec![]))
                }
            }
        }
        Event::WebAccess { granted } => {
            let had_deferred = state.has_deferred_fetch();
            match state.resolve_web_access(*granted) {
                Some((request_id, url)) => {
                    tracing::debug!(
                        request_id = request_id,
                        url = %url,
                        "dispatching deferred search"
                    );
                    Ok((false, vec![Action::FetchSearch { url, request_id }]))
                }
                None => Ok((had_deferred, vec![])),
            }
        }
        Event::SearchResponse { request_id, status, body } => {
            let outcome = search::parse_response(*status, body);
            let applied = state.complete_search(*request_id, outcome);
            Ok((applied, vec![]))
        }
        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),
        Event::Close => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Debug view of an event that leaves out response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::SearchResponse { request_id, status, body } => f
                .debug_struct("SearchResponse")
                .field("request_id", request_id)
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::app::FormField;
    use crate::search::SearchEndpoints;
    use crate::ui::card::CardView;
    use crate::ui::Theme;

    fn new_state() -> AppState {
        let mut state = pending_state();
        handle_event(&mut state, &Event::WebAccess { granted: true }).unwrap();
        state
    }

    fn pending_state() -> AppState {
        AppState::new(Theme::default(), SearchEndpoints::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn submit(state: &mut AppState) -> (u64, String) {
        let (render, actions) = handle_event(state, &Event::Submit).unwrap();
        assert!(render);
        match actions.as_slice() {
            [Action::FetchSearch { url, request_id }] => (*request_id, url.clone()),
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    fn respond(state: &mut AppState, request_id: u64, status: u16, body: &str) -> bool {
        let event = Event::SearchResponse {
            request_id,
            status,
            body: body.as_bytes().to_vec(),
        };
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn test_empty_submit_changes_nothing() {
        let mut state = new_state();
        type_text(&mut state, "Dune");
        let (id, _) = submit(&mut state);
        respond(&mut state, id, 200, r#"{"docs": []}"#);
        handle_event(&mut state, &Event::ClearField).unwrap();

        let before = state.search.clone();
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.search, before);
        assert_eq!(state.search.error_message, NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_submit_builds_url_from_all_fields() {
        let mut state = new_state();
        type_text(&mut state, "The Hobbit");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "Tolkien");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "19x37");

        let (_, url) = submit(&mut state);
        assert_eq!(
            url,
            concat!(
                "https://openlibrary.org/search.json",
                "?title=The%20Hobbit&author=Tolkien&publish_year=1937&"
            )
        );
    }

    #[test]
    fn test_loading_only_while_in_flight() {
        let mut state = new_state();
        type_text(&mut state, "Dune");
        assert!(!state.search.is_loading);

        let (id, _) = submit(&mut state);
        assert!(state.search.is_loading);

        assert!(respond(&mut state, id, 200, r#"{"docs": [{"key": "k", "title": "Dune"}]}"#));
        assert!(!state.search.is_loading);
        assert!(state.search.error_message.is_empty());
        assert_eq!(state.search.results.len(), 1);
    }

    #[test]
    fn test_result_count_is_capped() {
        let mut state = new_state();
        type_text(&mut state, "a");
        let (id, _) = submit(&mut state);

        let docs: Vec<String> = (0..30)
            .map(|i| format!(r#"{{"key": "k{i}", "title": "T{i}"}}"#))
            .collect();
        respond(&mut state, id, 200, &format!(r#"{{"docs": [{}]}}"#, docs.join(",")));

        assert_eq!(state.search.results.len(), 20);
        assert_eq!(state.search.results[0].key, "k0");
        assert!(state.search.error_message.is_empty());
    }

    #[test]
    fn test_failures_collapse_to_one_message() {
        for (status, body) in [
            (400, "error sending request"),
            (503, r#"{"docs": []}"#),
            (200, "not json"),
            (200, r#"{"results": []}"#),
        ] {
            let mut state = new_state();
            type_text(&mut state, "Dune");
            let (id, _) = submit(&mut state);
            assert!(respond(&mut state, id, status, body));
            assert_eq!(state.search.error_message, FETCH_FAILED_MESSAGE);
            assert!(state.search.results.is_empty());
            assert!(!state.search.is_loading);
        }
    }

    #[test]
    fn test_stale_response_does_not_overwrite_latest() {
        let mut state = new_state();
        type_text(&mut state, "Dune");
        let (first, _) = submit(&mut state);
        let (second, _) = submit(&mut state);

        assert!(respond(&mut state, second, 200, r#"{"docs": [{"key": "new", "title": "New"}]}"#));
        assert!(!respond(&mut state, first, 200, r#"{"docs": [{"key": "old", "title": "Old"}]}"#));

        assert_eq!(state.search.results.len(), 1);
        assert_eq!(state.search.results[0].key, "new");
        assert!(!state.search.is_loading);
    }

    #[test]
    fn test_search_waits_for_web_access() {
        let mut state = pending_state();
        type_text(&mut state, "Dune");

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.search.is_loading);

        let (_, actions) = handle_event(&mut state, &Event::WebAccess { granted: true }).unwrap();
        let [Action::FetchSearch { url, request_id }] = actions.as_slice() else {
            panic!("expected the deferred fetch, got {actions:?}");
        };
        assert_eq!(*request_id, 1);
        assert!(url.contains("title=Dune&"));

        let body = r#"{"docs": [{"key": "k", "title": "Dune"}]}"#;
        assert!(respond(&mut state, *request_id, 200, body));
        assert!(!state.search.is_loading);
        assert_eq!(state.search.results.len(), 1);
    }

    #[test]
    fn test_denial_fails_waiting_search() {
        let mut state = pending_state();
        type_text(&mut state, "Dune");
        handle_event(&mut state, &Event::Submit).unwrap();

        let (render, actions) =
            handle_event(&mut state, &Event::WebAccess { granted: false }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.search.is_loading);
        assert_eq!(state.search.error_message, FETCH_FAILED_MESSAGE);
        assert_eq!(state.in_flight_request(), None);
    }

    #[test]
    fn test_submit_after_denial_fails_immediately() {
        let mut state = pending_state();
        let (render, _) = handle_event(&mut state, &Event::WebAccess { granted: false }).unwrap();
        assert!(!render);

        type_text(&mut state, "Dune");
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.search.is_loading);
        assert_eq!(state.search.error_message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_year_field_rejects_letters() {
        let mut state = new_state();
        state.form.focus = FormField::Year;
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.form.year.is_empty());
    }

    #[test]
    fn test_close_emits_action() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn test_hobbit_end_to_end() {
        let mut state = new_state();
        type_text(&mut state, "Hobbit");
        let (id, url) = submit(&mut state);
        assert!(url.contains("title=Hobbit&"));

        let body = r#"{"docs": [{"key": "k1", "title": "The Hobbit",
            "author_name": ["J.R.R. Tolkien"], "first_publish_year": 1937, "cover_i": 99}]}"#;
        respond(&mut state, id, 200, body);

        let vm = state.compute_viewmodel(40, 80);
        let cards: Vec<&CardView> = vm.grid.rows.iter().flatten().collect();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "The Hobbit");
        assert_eq!(cards[0].authors, "J.R.R. Tolkien");
        assert_eq!(cards[0].year, "1937");
        assert!(cards[0].image_url.contains("99-M.jpg"));
    }
}
