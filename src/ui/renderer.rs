//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from state, then hand it
//! to the components.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{Location, ShellState};
//! use rolodex::routes::RouteData;
//! use rolodex::ui::render;
//!
//! let state = ShellState::new(Location::root(), RouteData::default(), "cupcake");
//! let html = render(&state);
//! assert!(html.contains("No contacts"));
//! ```

use crate::app::ShellState;
use crate::ui::components;
use crate::ui::viewmodel::ShellViewModel;

/// Renders the shell for `state` as a complete HTML document.
#[must_use]
pub fn render(state: &ShellState) -> String {
    let _span = tracing::trace_span!("render", location = %state.location).entered();

    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel)
}

/// Renders an already computed view model.
#[must_use]
pub fn render_viewmodel(vm: &ShellViewModel) -> String {
    let body = components::render_shell(vm);
    components::render_document(&vm.theme, &vm.header.title, &body)
}

/// Renders a standalone error document for failures outside any shell state.
#[must_use]
pub fn render_error_page(theme: &str, status: u16, message: &str) -> String {
    let body = format!(
        concat!(
            r#"<main class="p-8">"#,
            r#"<div id="error-page" role="alert" class="alert alert-error">"#,
            r#"<h1 class="font-bold">{status}</h1><p>{message}</p>"#,
            "</div>",
            r#"<p class="mt-4"><a class="link" href="/">Back to contacts</a></p>"#,
            "</main>"
        ),
        status = status,
        message = crate::ui::helpers::escape_html(message),
    );
    components::render_document(theme, "Error", &body)
}
