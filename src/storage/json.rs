//! JSON file-based contact store.
//!
//! A simple, human-readable store using JSON serialization. Writes go to a
//! temporary file that is then renamed over the target so a crash never leaves
//! a half-written document behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: served from memory, the file is loaded once on open
//! - **Write**: O(n), the whole document is rewritten on every change
//! - **Best for**: personal address books, infrequent writes

use crate::domain::error::{Result, RolodexError};
use crate::domain::Contact;
use crate::storage::backend::ContactStore;
use crate::storage::models::ContactRecord;
use crate::storage::search;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk document format.
///
/// Contacts are keyed by id for O(1) lookups. The version field leaves room
/// for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    contacts: HashMap<String, ContactRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            contacts: HashMap::new(),
        }
    }
}

/// JSON file contact store.
///
/// The entire dataset is kept in memory and persisted on modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "contacts": {
///     "5f0c...": {
///       "id": "5f0c...",
///       "first": "Ada",
///       "last": "Lovelace",
///       "favorite": true,
///       "created_at": 1700000000
///     }
///   }
/// }
/// ```
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
    /// Set when `data` has changes not yet written to `file_path`.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON contact store.
    ///
    /// If the file exists its contacts are loaded, otherwise the store starts
    /// empty. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rolodex::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/contacts.json"))?;
    /// # Ok::<(), rolodex::RolodexError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(contact_count = data.contacts.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| RolodexError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            contacts = data.contacts.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves the document using write-to-temp + rename.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| RolodexError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }

    /// Draws identifiers until one is unused.
    fn fresh_record(&self) -> ContactRecord {
        loop {
            let record = ContactRecord::new_empty();
            if !self.data.contacts.contains_key(&record.id) {
                return record;
            }
        }
    }
}

impl ContactStore for JsonStorage {
    fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        let _span = tracing::debug_span!("json_list_contacts", query = ?query).entered();

        let records: Vec<ContactRecord> = self.data.contacts.values().cloned().collect();
        let contacts = search::filter_and_sort(records, query)
            .into_iter()
            .map(Contact::from)
            .collect();

        Ok(contacts)
    }

    fn create_contact(&mut self) -> Result<Contact> {
        let _span = tracing::debug_span!("json_create_contact").entered();

        let record = self.fresh_record();
        let contact = Contact::from(record.clone());
        self.data.contacts.insert(record.id.clone(), record);

        self.dirty = true;
        if let Err(e) = self.save_to_file() {
            self.data.contacts.remove(&contact.id);
            self.dirty = false;
            return Err(e);
        }

        tracing::debug!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        let contact = self.data.contacts.get(id).cloned().map(Contact::from);
        tracing::debug!(contact_id = %id, found = contact.is_some(), "contact lookup complete");
        Ok(contact)
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
