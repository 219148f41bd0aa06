//! Contact domain model.
//!
//! A [`Contact`] is what the shell lists in its sidebar and what the outlet
//! shows. The shell never mutates contacts; they are created by the contact
//! store and handed to the view as an immutable snapshot per render.

use serde::{Deserialize, Serialize};

/// A single entry of the address book.
///
/// Names are optional: a freshly created contact has neither a first nor a
/// last name and is displayed with a placeholder until it is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl Contact {
    /// Creates an empty contact with the given identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::Contact;
    ///
    /// let contact = Contact::empty("abc");
    /// assert!(contact.first.is_none());
    /// assert!(contact.last.is_none());
    /// assert!(!contact.favorite);
    /// ```
    #[must_use]
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first: None,
            last: None,
            favorite: false,
        }
    }

    /// Returns the display name, or `None` when both name parts are missing or empty.
    ///
    /// Non-empty parts are joined with a single space, so a contact with only
    /// a last name renders as just that name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::Contact;
    ///
    /// let mut contact = Contact::empty("1");
    /// assert_eq!(contact.display_name(), None);
    ///
    /// contact.first = Some("Ada".to_string());
    /// contact.last = Some("Lovelace".to_string());
    /// assert_eq!(contact.display_name().as_deref(), Some("Ada Lovelace"));
    /// ```
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Path of this contact's detail view.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    /// Path of this contact's edit view; the target of the "New" redirect.
    #[must_use]
    pub fn edit_href(&self) -> String {
        format!("/contacts/{}/edit", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_skips_empty_parts() {
        let contact = Contact {
            id: "1".into(),
            first: Some(String::new()),
            last: Some("Hopper".into()),
            favorite: false,
        };
        assert_eq!(contact.display_name().as_deref(), Some("Hopper"));
    }

    #[test]
    fn whitespace_name_is_not_the_placeholder() {
        let contact = Contact {
            id: "1".into(),
            first: Some(" ".into()),
            last: None,
            favorite: false,
        };
        assert_eq!(contact.display_name().as_deref(), Some(" "));
    }

    #[test]
    fn edit_href_nests_under_contact() {
        let contact = Contact::empty("xyz");
        assert_eq!(contact.href(), "/contacts/xyz");
        assert_eq!(contact.edit_href(), "/contacts/xyz/edit");
    }
}
