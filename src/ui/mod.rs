//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable snapshot types consumed by the renderer
//! - [`card`]: Display derivation for a single search result
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Per-band renderers (header, form, status, grid, footer)
//! - [`helpers`]: Cursor positioning and width-aware text fitting
//! - [`theme`]: Color themes and ANSI escape sequence generation

pub mod card;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use card::CardView;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{FieldView, FooterInfo, GridView, HeaderInfo, StatusView, UIViewModel};
