//! Sidebar contact list renderer.
//!
//! One link per contact, in loader order. Link classes follow the navigation
//! state: the active contact is highlighted with the primary colour and the
//! pending one with a neutral background.

use crate::app::LinkState;
use crate::ui::helpers::{class_names, display_name_html, escape_html};
use crate::ui::viewmodel::ContactEntry;

/// Renders the contact list as a menu.
///
/// # Example
///
/// ```rust
/// use rolodex::app::LinkState;
/// use rolodex::ui::components::render_contact_list;
/// use rolodex::ui::viewmodel::ContactEntry;
///
/// let html = render_contact_list(&[ContactEntry {
///     name: None,
///     favorite: false,
///     href: "/contacts/1".to_string(),
///     link_state: LinkState::Inactive,
/// }]);
/// assert!(html.contains("<i>No Name</i>"));
/// ```
#[must_use]
pub fn render_contact_list(entries: &[ContactEntry]) -> String {
    let items: String = entries.iter().map(render_entry).collect();
    format!(r#"<ul class="menu">{items}</ul>"#)
}

fn render_entry(entry: &ContactEntry) -> String {
    let state_class = match entry.link_state {
        LinkState::Active => "bg-primary text-primary-content",
        LinkState::Pending => "bg-base-300",
        LinkState::Inactive => "",
    };
    let aria_current = if entry.link_state == LinkState::Active {
        r#" aria-current="page""#
    } else {
        ""
    };
    let star = if entry.favorite {
        r#" <span class="ml-4">★</span>"#
    } else {
        ""
    };

    format!(
        r#"<li><a href="{href}" class="{class}"{aria_current}>{name}{star}</a></li>"#,
        href = escape_html(&entry.href),
        class = class_names(&["block p-2", state_class]),
        name = display_name_html(entry.name.as_deref()),
    )
}
