//! Search request plumbing for the Open Library endpoint.
//!
//! The HTTP call itself is made by the Zellij host (`web_request`); this
//! module owns everything around it so it can be tested without a host:
//!
//! - `query`: query-string and URL construction
//! - `response`: status check, JSON schema validation, 20-item truncation
//! - request context: the request id carried through the host round trip
//!
//! # Request Tagging
//!
//! Each dispatched request carries its sequence number in the web request
//! context map. Zellij hands the same map back with the result event, which
//! lets the handler discard responses that are no longer the latest.

pub mod query;
pub mod response;

pub use query::{
    build_query_string, SearchEndpoints, DEFAULT_COVER_URL, DEFAULT_SEARCH_URL,
    PLACEHOLDER_COVER_URL,
};
pub use response::{parse_response, MAX_RESULTS};

use std::collections::BTreeMap;

/// Context key holding the request sequence number.
pub const REQUEST_ID_KEY: &str = "bookfinder_request_id";

/// Builds the web request context for a dispatched search.
#[must_use]
pub fn request_context(request_id: u64) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert(REQUEST_ID_KEY.to_string(), request_id.to_string());
    context
}

/// Reads the request sequence number back from a result context.
///
/// Returns `None` for results of requests this plugin did not tag.
#[must_use]
pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(REQUEST_ID_KEY).and_then(|id| id.parse().ok())
}
