//! Static assets served next to the documents.

use axum::http::header;
use axum::response::IntoResponse;

/// Fixed path the shell references the brand icon by.
pub const BRAND_ICON_PATH: &str = crate::ui::components::BRAND_ICON_HREF;

const BRAND_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" width="32" height="32"><rect x="4" y="3" width="24" height="26" rx="3" fill="#65c3c8"/><circle cx="16" cy="13" r="5" fill="#fff"/><path d="M8 25c1.5-4.5 4.5-6.5 8-6.5s6.5 2 8 6.5" fill="#fff"/></svg>"##;

/// Serves the brand icon.
pub async fn brand_icon() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        BRAND_ICON_SVG,
    )
}
