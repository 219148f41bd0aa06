//! Root route: the page loader and page action behind the shell.
//!
//! The loader runs on every navigation (the shell wraps every route) and
//! produces the sidebar data. The action handles the "New" form.

use crate::app::Location;
use crate::domain::{Contact, Result};
use crate::storage::ContactStore;

/// Data the shell renders: the contact list and the query that produced it.
///
/// Immutable for the duration of a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderData {
    pub contacts: Vec<Contact>,
    pub query: Option<String>,
}

/// Loads the sidebar contacts for `location`.
///
/// The `q` parameter is forwarded to the store untouched; `None` lists
/// everything. Store failures propagate to the caller's error boundary.
///
/// # Errors
///
/// Returns any error raised by [`ContactStore::list_contacts`].
///
/// # Examples
///
/// ```
/// use rolodex::app::Location;
/// use rolodex::routes::root::loader;
/// use rolodex::storage::MemoryStorage;
///
/// let storage = MemoryStorage::new();
/// let data = loader(&storage, &Location::root().with_query("ada"))?;
/// assert!(data.contacts.is_empty());
/// assert_eq!(data.query.as_deref(), Some("ada"));
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
pub fn loader(store: &dyn ContactStore, location: &Location) -> Result<LoaderData> {
    let _span = tracing::debug_span!("root_loader", location = %location).entered();

    let query = location.query.clone();
    let contacts = store.list_contacts(query.as_deref())?;

    tracing::debug!(contact_count = contacts.len(), "root loader finished");
    Ok(LoaderData { contacts, query })
}

/// Creates an empty contact and returns the location to redirect to.
///
/// The redirect always targets the new contact's edit view.
///
/// # Errors
///
/// Returns any error raised by [`ContactStore::create_contact`]. There is no
/// retry.
pub fn action(store: &mut dyn ContactStore) -> Result<Location> {
    let _span = tracing::debug_span!("root_action").entered();

    let contact = store.create_contact()?;
    let target = Location::new(contact.edit_href());

    tracing::info!(contact_id = %contact.id, redirect = %target, "contact created");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn action_redirects_to_edit_view_of_new_contact() {
        let mut storage = MemoryStorage::new();
        let target = action(&mut storage).unwrap();

        let contacts = storage.list_contacts(None).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(target.path, format!("/contacts/{}/edit", contacts[0].id));
        assert_eq!(target.query, None);
    }

    #[test]
    fn loader_without_query_lists_everything() {
        let mut storage = MemoryStorage::new();
        storage.create_contact().unwrap();
        storage.create_contact().unwrap();

        let data = loader(&storage, &Location::new("/contacts/abc")).unwrap();
        assert_eq!(data.contacts.len(), 2);
        assert_eq!(data.query, None);
    }
}
