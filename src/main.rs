//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the bookfinder library and the Zellij
//! plugin API. It translates host events into library events, feeds them to
//! [`handle_event`], and turns the returned actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Update**: Map events, delegate to the library, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → see [`bookfinder::app::keys`]
//! - `WebRequestResult` → `Event::SearchResponse` (only if tagged by us)
//! - `PermissionRequestResult` → `Event::WebAccess`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookfinder::search::{request_context, request_id_from_context};
use bookfinder::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: bookfinder::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookfinder::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Requests `WebAccess` and subscribes to keys and web request results.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookfinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            search_url = %config.search_url,
            cover_url = %config.cover_url,
            "parsed configuration"
        );
        self.app = bookfinder::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_result(permissions)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        bookfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a finished web request to a search response.
    ///
    /// Requests issued by other plugins in the same instance carry no request
    /// id and are ignored.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = request_id_from_context(context) else {
            tracing::debug!(status, "ignoring untagged web request result");
            return None;
        };

        tracing::debug!(request_id, status, body_len = body.len(), "web request result");
        Some(Event::SearchResponse {
            request_id,
            status,
            body,
        })
    }

    /// Feeds the permission answer back so waiting searches can proceed or fail.
    fn map_permission_result(permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
                Event::WebAccess { granted: true }
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied, searches will report a fetch failure");
                Event::WebAccess { granted: false }
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::FetchSearch { url, request_id } => {
                tracing::debug!(request_id, url = %url, "issuing web request");
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request_context(*request_id),
                );
            }
        }
    }
}
