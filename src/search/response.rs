//! Validation of search responses at the network boundary.
//!
//! The response body is decoded into an explicit schema. Anything that does
//! not fit (non-2xx status, non-JSON body, missing or mistyped `docs`, a
//! document without `key`/`title`) is an error, never a partially filled
//! record.

use crate::domain::error::{BookfinderError, Result};
use crate::domain::BookSummary;
use serde::Deserialize;

/// Maximum number of results kept from a single response.
pub const MAX_RESULTS: usize = 20;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    docs: Vec<BookSummary>,
}

/// Validates a raw search response and returns at most [`MAX_RESULTS`]
/// summaries in API order.
///
/// # Errors
///
/// - [`BookfinderError::Transport`] when `status` is not 2xx
/// - [`BookfinderError::Decode`] when the body does not match the schema
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<BookSummary>> {
    if !(200..300).contains(&status) {
        return Err(BookfinderError::Transport { status });
    }

    let response: SearchResponse = serde_json::from_slice(body)?;
    let total = response.docs.len();
    let docs: Vec<BookSummary> = response.docs.into_iter().take(MAX_RESULTS).collect();

    tracing::debug!(total_docs = total, kept = docs.len(), "search response decoded");
    Ok(docs)
}
