//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a list of
//! [`Action`]s and the plugin shim turns each into a host call, which keeps
//! every state transition testable without a running host.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET for a search.
    ///
    /// The shim tags the request with `request_id` so the result event can
    /// be matched against the latest dispatched search.
    FetchSearch {
        /// Full search URL including the query string.
        url: String,
        /// Monotonic sequence number of this search.
        request_id: u64,
    },
}
