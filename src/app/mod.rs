//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the search/UI layers.
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState → Action → Zellij
//!                                                    ↓
//!                                              UIViewModel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`keys`]: Key bindings
//! - [`modes`]: Form field focus
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::FormField;
pub use state::{AppState, FormState, SearchState, WebAccess};
