//! Bookfinder: a Zellij plugin for searching Open Library.
//!
//! The plugin shows a three-field search form (title, author, first publish
//! year). Submitting it sends one GET request to the Open Library search
//! endpoint and renders the first twenty matches as a grid of cards.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Event handling                                   │
//! │  - Latest-request-wins bookkeeping                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ Search Layer          │       │ UI Layer              │
//! │ (search/)             │       │ (ui/)                 │
//! │ - Query string        │       │ - Card derivation     │
//! │ - Response decoding   │       │ - Components, theming │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Types, errors
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls into Zellij; it only borrows its key types for
//! [`map_key`]. HTTP goes through the host's `web_request`, which the shim
//! issues for [`Action::FetchSearch`] and answers with
//! [`Event::SearchResponse`]. Searches wait for the `WebAccess` permission,
//! reported as [`Event::WebAccess`].
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookfinder.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "bookfinder=debug"
//!     }
//! }
//! ```
//!
//! See [`Config`] for every key.
//!
//! # Example
//!
//! ```rust
//! use bookfinder::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::WebAccess { granted: true })?;
//! for c in "hobbit".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Action::FetchSearch { url, request_id } = &actions[0] else {
//!     unreachable!()
//! };
//! assert_eq!(url, "https://openlibrary.org/search.json?title=hobbit&");
//!
//! let body = br#"{"docs":[{"key":"/works/OL27482W","title":"The Hobbit"}]}"#;
//! handle_event(
//!     &mut state,
//!     &Event::SearchResponse { request_id: *request_id, status: 200, body: body.to_vec() },
//! )?;
//! assert_eq!(state.search.results.len(), 1);
//! # Ok::<(), bookfinder::BookfinderError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, FormField};
pub use domain::{BookSummary, BookfinderError, Result, SearchQuery};
pub use ui::Theme;

use search::{SearchEndpoints, DEFAULT_COVER_URL, DEFAULT_SEARCH_URL};
use std::collections::BTreeMap;

/// Plugin configuration.
///
/// Parsed from the key/value map Zellij hands to `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search endpoint. Default: `https://openlibrary.org/search.json`
    pub search_url: String,

    /// Cover image host. Default: `https://covers.openlibrary.org`
    pub cover_url: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. A leading `~` is expanded.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            cover_url: DEFAULT_COVER_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Keys: `search_url`, `cover_url`, `theme`, `theme_file`, `trace_level`.
    /// Blank values count as unset. A URL that is not `http(s)` is logged and
    /// replaced by its default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("cover_url".to_string(), "http://localhost:8080/".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.cover_url, "http://localhost:8080");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let url = |key: &str, default: &str| {
            value(key).map_or_else(
                || default.to_string(),
                |raw| {
                    parse_url(key, &raw).unwrap_or_else(|e| {
                        tracing::debug!(key, error = %e, "ignoring configured url");
                        default.to_string()
                    })
                },
            )
        };

        Self {
            search_url: url("search_url", DEFAULT_SEARCH_URL),
            cover_url: url("cover_url", DEFAULT_COVER_URL),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Endpoints derived from the URL settings.
    #[must_use]
    pub fn endpoints(&self) -> SearchEndpoints {
        SearchEndpoints {
            search_url: self.search_url.clone(),
            cover_url: self.cover_url.clone(),
        }
    }
}

/// Trims trailing slashes and requires an `http` or `https` scheme.
fn parse_url(key: &str, raw: &str) -> Result<String> {
    let url = raw.trim_end_matches('/');
    let has_host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());

    if has_host {
        Ok(url.to_string())
    } else {
        Err(BookfinderError::Config(format!("{key} must be an http(s) URL, got {raw:?}")))
    }
}

/// Builds the initial application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(search_url = %config.search_url, "initializing bookfinder plugin");
    AppState::new(load_theme(config), config.endpoints())
}

/// Resolves the theme: `theme_file`, then `theme_name`, then the default.
///
/// A theme that cannot be loaded is logged and replaced by the default; it
/// never stops the plugin from starting.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return match Theme::from_file(&path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::debug!(
                    theme_file = %path,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            }
        };
    }

    match config.theme_name.as_deref() {
        Some(name) => Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_urls_trim_trailing_slashes() {
        let config = Config::from_zellij(&map(&[
            ("search_url", "http://localhost:9000/search.json/"),
            ("cover_url", "https://img.example.org//"),
        ]));
        assert_eq!(config.search_url, "http://localhost:9000/search.json");
        assert_eq!(config.cover_url, "https://img.example.org");
    }

    #[test]
    fn test_invalid_url_falls_back() {
        let config = Config::from_zellij(&map(&[
            ("search_url", "ftp://example.org"),
            ("cover_url", "https://"),
        ]));
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.cover_url, DEFAULT_COVER_URL);
    }

    #[test]
    fn test_parse_url_error_variant() {
        let err = parse_url("search_url", "openlibrary.org").unwrap_err();
        assert!(matches!(err, BookfinderError::Config(_)));
        assert!(err.to_string().contains("search_url"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "debug")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_initialize_theme_resolution() {
        let latte = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&latte).theme.name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("gruvbox".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&unknown).theme, Theme::default());

        let missing_file = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&missing_file).theme, Theme::default());
    }

    #[test]
    fn test_initialize_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string(&Theme::default()).unwrap();
        file.write_all(toml.replace("catppuccin-mocha", "from-file").as_bytes()).unwrap();

        let config = Config {
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "from-file");
    }

    #[test]
    fn test_initialize_uses_endpoints() {
        let config = Config {
            cover_url: "http://covers.local".to_string(),
            ..Default::default()
        };
        assert_eq!(initialize(&config).endpoints.cover_url, "http://covers.local");
    }
}
