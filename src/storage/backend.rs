//! Contact store abstraction.
//!
//! This module defines the [`ContactStore`] trait: the data access facade the
//! page loader and page action talk to. The trait is minimal and maps directly
//! onto the operations the shell needs.

use crate::domain::error::Result;
use crate::domain::Contact;

/// Abstraction over persistent contact backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map
///
/// # Examples
///
/// ```
/// use rolodex::storage::{ContactStore, MemoryStorage};
///
/// let mut storage = MemoryStorage::new();
/// let created = storage.create_contact()?;
/// let listed = storage.list_contacts(None)?;
/// assert_eq!(listed, vec![created]);
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
pub trait ContactStore: Send {
    /// Lists contacts matching `query`, ordered for display.
    ///
    /// `None` and blank queries mean "no filter". Matching and ordering rules
    /// live in [`crate::storage::search`].
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>>;

    /// Creates a new contact with empty names and `favorite = false`.
    ///
    /// The returned contact carries a fresh identifier not used by any other
    /// stored contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the contact cannot be persisted.
    fn create_contact(&mut self) -> Result<Contact>;

    /// Retrieves a single contact by identifier.
    ///
    /// Returns `Ok(None)` if the contact doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_contact(&self, id: &str) -> Result<Option<Contact>>;
}
