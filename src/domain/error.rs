//! Error types for the Bookfinder plugin.
//!
//! [`BookfinderError`] covers every failure the plugin can observe, from the
//! search endpoint to theme loading. Search failures never reach the renderer:
//! the event handler folds them into a single user-facing message.

use thiserror::Error;

/// The main error type for Bookfinder operations.
///
/// # Examples
///
/// ```
/// use bookfinder::BookfinderError;
///
/// let err = BookfinderError::Transport { status: 503 };
/// assert_eq!(err.to_string(), "Search request failed with HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum BookfinderError {
    /// The host reported a failed request or a non-2xx HTTP status.
    ///
    /// Zellij reports connection failures as a result event with a 4xx
    /// status and the transport error text as the body, so both cases land
    /// here.
    #[error("Search request failed with HTTP status {status}")]
    Transport {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// The response body was not valid JSON or did not match the expected
    /// search response shape.
    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The user denied the plugin's web access permission.
    #[error("Web access permission was denied")]
    WebAccessDenied,

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookfinder operations.
pub type Result<T> = std::result::Result<T, BookfinderError>;
