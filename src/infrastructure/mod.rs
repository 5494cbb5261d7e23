//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so any
//! path the user writes with `~` has to be translated before it can be read.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
