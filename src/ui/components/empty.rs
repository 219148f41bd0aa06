//! Empty contact list message.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::EmptyState;

/// Renders the static message shown instead of the contact list.
#[must_use]
pub fn render_empty_state(empty: &EmptyState) -> String {
    format!(
        r#"<p class="text-base-content/70 italic">{}</p>"#,
        escape_html(&empty.message)
    )
}
