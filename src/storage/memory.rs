//! In-memory contact store.
//!
//! Used when no data file is configured and by tests. Same matching and
//! ordering as [`JsonStorage`](crate::storage::JsonStorage), nothing persisted.

use crate::domain::error::Result;
use crate::domain::Contact;
use crate::storage::backend::ContactStore;
use crate::storage::models::ContactRecord;
use crate::storage::search;
use std::collections::HashMap;

/// Process-local contact store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contacts: HashMap<String, ContactRecord>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `records`.
    ///
    /// Later records win when ids collide.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = ContactRecord>) -> Self {
        let contacts = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self { contacts }
    }

    /// Number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no contacts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactStore for MemoryStorage {
    fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        let records: Vec<ContactRecord> = self.contacts.values().cloned().collect();
        Ok(search::filter_and_sort(records, query)
            .into_iter()
            .map(Contact::from)
            .collect())
    }

    fn create_contact(&mut self) -> Result<Contact> {
        let record = loop {
            let candidate = ContactRecord::new_empty();
            if !self.contacts.contains_key(&candidate.id) {
                break candidate;
            }
        };

        let contact = Contact::from(record.clone());
        self.contacts.insert(record.id.clone(), record);
        tracing::debug!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.contacts.get(id).cloned().map(Contact::from))
    }
}
