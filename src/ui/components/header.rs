//! Navbar component renderer.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the navbar with the drawer toggle (small screens) and the title.
///
/// # Example
///
/// ```rust
/// use rolodex::ui::components::render_header;
/// use rolodex::ui::viewmodel::HeaderInfo;
///
/// let html = render_header(&HeaderInfo { title: "Contacts".to_string() });
/// assert!(html.contains(r#"<h1 class="text-xl font-bold">Contacts</h1>"#));
/// ```
#[must_use]
pub fn render_header(header: &HeaderInfo) -> String {
    format!(
        concat!(
            r#"<div class="navbar bg-base-100">"#,
            r#"<div class="flex-none lg:hidden">"#,
            r#"<label for="drawer-toggle" aria-label="Open drawer" class="btn btn-square btn-ghost drawer-button lg:hidden">"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">"#,
            r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7"/>"#,
            "</svg></label></div>",
            r#"<div class="flex-1 px-2 mx-2"><h1 class="text-xl font-bold">{title}</h1></div>"#,
            r#"<div class="flex-none hidden lg:block"></div>"#,
            "</div>"
        ),
        title = escape_html(&header.title)
    )
}
