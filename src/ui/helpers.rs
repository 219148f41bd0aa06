//! Shared rendering utilities.
//!
//! Every piece of user-controlled text (contact names, the search value,
//! error messages) goes through [`escape_html`] before it is written into a
//! document.

/// Escapes text for use in HTML element content and quoted attribute values.
///
/// # Example
///
/// ```rust
/// use rolodex::ui::helpers::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Joins the non-empty class names with single spaces.
#[must_use]
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a display name, or the italic placeholder when there is none.
#[must_use]
pub fn display_name_html(name: Option<&str>) -> String {
    name.map_or_else(|| "<i>No Name</i>".to_string(), escape_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_skips_empty_entries() {
        assert_eq!(class_names(&["input", "", "input-bordered"]), "input input-bordered");
        assert_eq!(class_names(&["", ""]), "");
    }

    #[test]
    fn missing_name_renders_placeholder() {
        assert_eq!(display_name_html(None), "<i>No Name</i>");
        assert_eq!(display_name_html(Some("O'Brien")), "O&#39;Brien");
    }
}
