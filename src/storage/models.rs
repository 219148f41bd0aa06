//! Storage record models for the persistence layer.
//!
//! Records carry storage-only fields (creation time used for ordering) and are
//! converted to the domain [`Contact`] before leaving the store.

use crate::domain::Contact;
use serde::{Deserialize, Serialize};

/// Represents a contact record in storage.
///
/// Unlike the domain `Contact`, this record includes `created_at`, which the
/// list operation uses as a tie-breaker after the last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique, stable identifier.
    pub id: String,

    /// First name, `None` until edited.
    #[serde(default)]
    pub first: Option<String>,

    /// Last name, `None` until edited.
    #[serde(default)]
    pub last: Option<String>,

    /// Whether the contact is starred.
    #[serde(default)]
    pub favorite: bool,

    /// Unix timestamp when the contact was created.
    pub created_at: i64,
}

impl ContactRecord {
    /// Creates an empty record with a fresh identifier and the current time.
    ///
    /// Names are unset and `favorite` is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::storage::ContactRecord;
    ///
    /// let record = ContactRecord::new_empty();
    /// assert!(record.first.is_none());
    /// assert!(!record.favorite);
    /// assert!(!record.id.is_empty());
    /// ```
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            first: None,
            last: None,
            favorite: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            first: record.first,
            last: record.last,
            favorite: record.favorite,
        }
    }
}
