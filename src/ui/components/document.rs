//! HTML document frame: head links, theme attribute and the search script.

use crate::ui::helpers::escape_html;

/// Static `<link>` configuration: font host preconnects and the Inter stylesheet.
const HEAD_LINKS: &str = concat!(
    r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#,
    r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous">"#,
    r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:ital,opsz,wght@0,14..32,100..900;1,14..32,100..900&amp;display=swap">"#,
    r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css">"#,
);

/// Submits the search form on every input change. `data-history="replace"`
/// replaces the current entry instead of pushing a new one.
///
/// Each submission reloads the page, so the autofocused input gets its caret
/// moved back to the end of the value on load.
const SEARCH_SCRIPT: &str = concat!(
    "<script>",
    r#"(function(){var form=document.getElementById("search-form");if(!form){return;}"#,
    r#"var q=document.getElementById("q");"#,
    r#"if(q&&q.autofocus){var end=q.value.length;q.focus();q.setSelectionRange(end,end);}"#,
    r#"form.addEventListener("input",function(){"#,
    r#"var spinner=document.getElementById("search-spinner");if(spinner){spinner.hidden=false;}"#,
    r#"if(q){q.classList.add("bg-gray-200");}"#,
    r#"var target=form.getAttribute("action")+"?"+new URLSearchParams(new FormData(form)).toString();"#,
    r#"if(form.dataset.history==="replace"){location.replace(target);}else{location.assign(target);}"#,
    "});})();",
    "</script>"
);

/// Wraps `body` in a complete HTML document.
#[must_use]
pub fn render_document(theme: &str, title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en" class="h-full" data-theme="{theme}">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            "{links}",
            "</head>",
            r#"<body class="h-full">{body}{script}</body>"#,
            "</html>"
        ),
        theme = escape_html(theme),
        title = escape_html(title),
        links = HEAD_LINKS,
        body = body,
        script = SEARCH_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::search::SEARCHING_CLASS;

    #[test]
    fn script_dims_input_while_submitting() {
        assert!(SEARCH_SCRIPT.contains(&format!(r#"classList.add("{SEARCHING_CLASS}")"#)));
        assert!(SEARCH_SCRIPT.contains("spinner.hidden=false"));
    }

    #[test]
    fn script_restores_caret_after_reload() {
        assert!(SEARCH_SCRIPT.contains("setSelectionRange(end,end)"));
    }
}
