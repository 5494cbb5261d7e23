//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from `AppState`, then
//! hand it to the component layout. Nothing here reads state directly.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`; Zellij clears the pane before
/// each render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel: UIViewModel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
