//! Sidebar footer with the brand icon.

/// Path the brand icon is served from.
pub const BRAND_ICON_HREF: &str = "/brand-icon.svg";

/// Renders the brand icon pinned to the bottom of the sidebar at 32×32.
#[must_use]
pub fn render_footer() -> String {
    format!(
        r#"<div class="mt-auto"><img src="{BRAND_ICON_HREF}" alt="Brand Icon" class="w-8 h-8"></div>"#
    )
}
