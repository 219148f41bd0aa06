//! Composable HTML component renderers.
//!
//! Each component renders one part of the shell into an HTML fragment.
//! [`render_shell`] assembles them into the drawer layout:
//!
//! ```text
//! ┌──────────── drawer-side ────────────┐┌──────── drawer-content ────────┐
//! │ search form                          ││ navbar                         │
//! │ "New" form                           ││ outlet                         │
//! │ contact list | "No contacts"         ││                                │
//! │ brand icon                           ││                                │
//! └──────────────────────────────────────┘└────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`document`]: `<html>` frame, head links, search script
//! - [`header`]: navbar
//! - [`search`]: search form and "New" form
//! - [`contact_list`]: sidebar links
//! - [`empty`]: empty list message
//! - [`outlet`]: nested route content
//! - [`footer`]: brand icon

pub mod contact_list;
pub mod document;
pub mod empty;
pub mod footer;
pub mod header;
pub mod outlet;
pub mod search;

pub use contact_list::render_contact_list;
pub use document::render_document;
pub use empty::render_empty_state;
pub use footer::{render_footer, BRAND_ICON_HREF};
pub use header::render_header;
pub use outlet::render_outlet;
pub use search::{render_new_contact_form, render_search_bar};

use crate::ui::viewmodel::ShellViewModel;

/// Renders the drawer layout for `vm` (without the document frame).
#[must_use]
pub fn render_shell(vm: &ShellViewModel) -> String {
    let list = vm.empty_state.as_ref().map_or_else(
        || render_contact_list(&vm.contacts),
        render_empty_state,
    );

    format!(
        concat!(
            r#"<div class="drawer lg:drawer-open">"#,
            r#"<input id="drawer-toggle" type="checkbox" class="drawer-toggle">"#,
            r#"<div class="drawer-content flex flex-col">{header}<div class="p-4">{outlet}</div></div>"#,
            r#"<div class="drawer-side">"#,
            r#"<label for="drawer-toggle" class="drawer-overlay"></label>"#,
            r#"<div class="menu p-4 w-80 min-h-full bg-base-200 text-base-content">"#,
            r#"<div class="mb-4">{search}</div>"#,
            r#"<div class="mb-4">{new_form}</div>"#,
            "<nav>{list}</nav>",
            "{footer}",
            "</div></div></div>"
        ),
        header = render_header(&vm.header),
        outlet = render_outlet(&vm.outlet),
        search = render_search_bar(&vm.search_bar),
        new_form = render_new_contact_form(),
        list = list,
        footer = render_footer(),
    )
}
