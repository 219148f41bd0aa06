//! Server-rendered HTML view layer.
//!
//! # Architecture
//!
//! ```text
//! ShellState → compute_viewmodel → ShellViewModel → render → HTML
//! ```
//!
//! The styling system is external: components only emit class names, and the
//! document links the stylesheet from a CDN.
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready types
//! - [`renderer`]: rendering entry points
//! - [`components`]: HTML fragments
//! - [`helpers`]: escaping and class utilities

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_error_page, render_viewmodel};
pub use viewmodel::{
    ContactCard, ContactEntry, EmptyState, HeaderInfo, OutletView, SearchBarInfo, ShellViewModel,
};
