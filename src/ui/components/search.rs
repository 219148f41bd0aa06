//! Search form and "New" form renderers.
//!
//! The search form is a plain GET form targeting `/` with a single `q` input.
//! Its `data-history` attribute tells the document script whether the next
//! submission pushes or replaces the history entry.

use crate::app::{HistoryMode, SearchStatus};
use crate::ui::helpers::{class_names, escape_html};
use crate::ui::viewmodel::SearchBarInfo;

/// Background class applied to the input while a search is pending.
pub const SEARCHING_CLASS: &str = "bg-gray-200";

/// Renders the search form.
///
/// While [`SearchStatus::Searching`] the input is dimmed and the spinner is
/// visible; otherwise the spinner carries the `hidden` attribute. The input is
/// autofocused while a search is under way.
///
/// # Example
///
/// ```rust
/// use rolodex::app::{HistoryMode, SearchStatus};
/// use rolodex::ui::components::render_search_bar;
/// use rolodex::ui::viewmodel::SearchBarInfo;
///
/// let html = render_search_bar(&SearchBarInfo {
///     value: "ada".to_string(),
///     status: SearchStatus::Searching,
///     history_mode: HistoryMode::Replace,
/// });
/// assert!(html.contains(r#"value="ada""#));
/// assert!(html.contains(r#"data-history="replace""#));
/// assert!(html.contains("bg-gray-200"));
/// ```
#[must_use]
pub fn render_search_bar(search: &SearchBarInfo) -> String {
    let searching = search.status == SearchStatus::Searching;
    let input_class = class_names(&[
        "input",
        "input-bordered",
        if searching { SEARCHING_CLASS } else { "" },
    ]);
    let spinner_hidden = if searching { "" } else { " hidden" };
    // Every keystroke reloads the page; keep typing in the same box. A
    // committed query replaces, so `Replace` also covers an emptied `?q=`.
    let mid_search = !search.value.is_empty() || search.history_mode == HistoryMode::Replace;
    let autofocus = if mid_search { " autofocus" } else { "" };

    format!(
        concat!(
            r#"<form id="search-form" role="search" class="form-control" action="/" method="get" data-history="{mode}">"#,
            r#"<input aria-label="Search contacts" class="{input_class}" value="{value}" id="q" name="q" placeholder="Search" type="search"{autofocus}>"#,
            r#"<div aria-hidden="true" id="search-spinner"{spinner_hidden}></div>"#,
            "</form>"
        ),
        mode = search.history_mode.as_str(),
        input_class = input_class,
        value = escape_html(&search.value),
        autofocus = autofocus,
        spinner_hidden = spinner_hidden,
    )
}

/// Renders the "New" form. It posts to the current route without fields.
#[must_use]
pub fn render_new_contact_form() -> String {
    r#"<form method="post"><button type="submit" class="btn btn-primary w-full">New</button></form>"#
        .to_string()
}
