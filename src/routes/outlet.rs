//! Route recognition and the nested loaders behind the content outlet.
//!
//! The shell itself does not know about contact pages; it renders whatever
//! [`OutletData`] the nested route produced.

use crate::domain::{Contact, Result, RolodexError};
use crate::storage::ContactStore;

/// Routes the application serves documents for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Index,
    /// `/contacts/{id}`
    Contact { id: String },
    /// `/contacts/{id}/edit`
    EditContact { id: String },
}

impl Route {
    /// Matches a normalized path against the route table.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::routes::Route;
    ///
    /// assert_eq!(Route::recognize("/"), Some(Route::Index));
    /// assert_eq!(
    ///     Route::recognize("/contacts/7/edit"),
    ///     Some(Route::EditContact { id: "7".into() })
    /// );
    /// assert_eq!(Route::recognize("/about"), None);
    /// ```
    #[must_use]
    pub fn recognize(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Index),
            ["contacts", id] => Some(Self::Contact { id: (*id).to_string() }),
            ["contacts", id, "edit"] => Some(Self::EditContact { id: (*id).to_string() }),
            _ => None,
        }
    }
}

/// What the content outlet renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutletData {
    /// Landing text shown when no contact is selected.
    #[default]
    Index,
    /// Read-only contact card.
    Contact(Contact),
    /// Edit view of a contact (editing itself is handled elsewhere).
    EditContact(Contact),
}

/// Runs the nested loader for `route`.
///
/// # Errors
///
/// Returns [`RolodexError::NotFound`] when the contact does not exist, or any
/// store error.
pub fn load(store: &dyn ContactStore, route: &Route) -> Result<OutletData> {
    let fetch = |id: &str| -> Result<Contact> {
        store
            .get_contact(id)?
            .ok_or_else(|| RolodexError::NotFound(format!("contact {id}")))
    };

    match route {
        Route::Index => Ok(OutletData::Index),
        Route::Contact { id } => fetch(id).map(OutletData::Contact),
        Route::EditContact { id } => fetch(id).map(OutletData::EditContact),
    }
}
