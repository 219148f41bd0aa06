//! Content outlet renderer.
//!
//! The outlet shows whatever the nested route loaded. Contact views are
//! read-only; the edit view renders the form fields disabled.

use crate::ui::helpers::{display_name_html, escape_html};
use crate::ui::viewmodel::{ContactCard, OutletView};

#[must_use]
pub fn render_outlet(outlet: &OutletView) -> String {
    match outlet {
        OutletView::Index => render_index(),
        OutletView::Contact(card) => render_contact(card),
        OutletView::EditContact(card) => render_edit(card),
        OutletView::Error { message } => render_error(message),
    }
}

fn render_index() -> String {
    concat!(
        r#"<p id="index-page" class="text-base-content/70">"#,
        "Select a contact from the list, or create one with New.",
        "</p>"
    )
    .to_string()
}

fn favorite_marker(card: &ContactCard) -> &'static str {
    if card.favorite {
        r#" <span class="text-warning" aria-label="Favorite">★</span>"#
    } else {
        ""
    }
}

fn render_contact(card: &ContactCard) -> String {
    format!(
        concat!(
            r#"<div id="contact" class="card bg-base-100 shadow">"#,
            r#"<div class="card-body">"#,
            r#"<h2 class="card-title">{name}{favorite}</h2>"#,
            r#"<div class="card-actions"><a class="btn" href="{edit_href}">Edit</a></div>"#,
            "</div></div>"
        ),
        name = display_name_html(card.name.as_deref()),
        favorite = favorite_marker(card),
        edit_href = escape_html(&card.edit_href),
    )
}

// Editing is handled by a separate flow; this view only shows the fields.
fn render_edit(card: &ContactCard) -> String {
    format!(
        concat!(
            r#"<div id="contact-form" class="card bg-base-100 shadow">"#,
            r#"<div class="card-body">"#,
            r#"<h2 class="card-title">Edit contact</h2>"#,
            r#"<label class="form-control"><span class="label-text">First</span>"#,
            r#"<input class="input input-bordered" name="first" value="{first}" aria-label="First name" disabled></label>"#,
            r#"<label class="form-control"><span class="label-text">Last</span>"#,
            r#"<input class="input input-bordered" name="last" value="{last}" aria-label="Last name" disabled></label>"#,
            r#"<div class="card-actions"><a class="btn btn-ghost" href="{href}">Back</a></div>"#,
            "</div></div>"
        ),
        first = escape_html(&card.first),
        last = escape_html(&card.last),
        href = escape_html(&card.href),
    )
}

fn render_error(message: &str) -> String {
    format!(
        r#"<div id="error-page" role="alert" class="alert alert-error"><h2 class="font-bold">Oops!</h2><p>{}</p></div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ContactCard {
        ContactCard {
            name: Some("Ada Lovelace".to_string()),
            first: "Ada".to_string(),
            last: "Lovelace".to_string(),
            favorite: true,
            href: "/contacts/1".to_string(),
            edit_href: "/contacts/1/edit".to_string(),
        }
    }

    #[test]
    fn contact_card_links_to_edit_view() {
        let html = render_outlet(&OutletView::Contact(card()));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains(r#"href="/contacts/1/edit""#));
    }

    #[test]
    fn edit_view_is_read_only() {
        let html = render_outlet(&OutletView::EditContact(card()));
        assert!(html.contains(r#"value="Ada""#));
        assert_eq!(html.matches(" disabled>").count(), 2);
    }

    #[test]
    fn error_message_is_escaped() {
        let html = render_outlet(&OutletView::Error {
            message: "<boom>".to_string(),
        });
        assert!(html.contains("&lt;boom&gt;"));
    }
}
