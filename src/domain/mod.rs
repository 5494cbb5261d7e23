//! Domain layer for the Bookfinder plugin.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Search query and book summary models

pub mod book;
pub mod error;

pub use book::{BookSummary, SearchQuery};
pub use error::{BookfinderError, Result};
