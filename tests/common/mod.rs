#![allow(dead_code)]

use rolodex::app::Session;
use rolodex::storage::{ContactRecord, ContactStore, MemoryStorage};
use rolodex::{Contact, Result, RolodexError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const THEME: &str = "cupcake";

pub fn record(id: &str, first: &str, last: &str, favorite: bool, created_at: i64) -> ContactRecord {
    let name = |part: &str| (!part.is_empty()).then(|| part.to_string());
    ContactRecord {
        id: id.to_string(),
        first: name(first),
        last: name(last),
        favorite,
        created_at,
    }
}

/// Three contacts: a favorite, a plain one and one without a name.
pub fn sample_store() -> MemoryStorage {
    MemoryStorage::with_records([
        record("1", "Ada", "Lovelace", true, 10),
        record("2", "Grace", "Hopper", false, 20),
        record("3", "", "", false, 30),
    ])
}

pub fn open_session(href: &str) -> Session {
    Session::open(Box::new(sample_store()), href, THEME).expect("session opens")
}

/// Store that fails every call while its switch is on.
pub struct FlakyStore {
    inner: MemoryStorage,
    down: Arc<AtomicBool>,
}

impl FlakyStore {
    /// Wraps `inner`; the returned flag takes the store down when set.
    pub fn new(inner: MemoryStorage) -> (Self, Arc<AtomicBool>) {
        let down = Arc::new(AtomicBool::new(false));
        let store = Self {
            inner,
            down: Arc::clone(&down),
        };
        (store, down)
    }

    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(RolodexError::Storage("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ContactStore for FlakyStore {
    fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        self.check()?;
        self.inner.list_contacts(query)
    }

    fn create_contact(&mut self) -> Result<Contact> {
        self.check()?;
        self.inner.create_contact()
    }

    fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        self.check()?;
        self.inner.get_contact(id)
    }
}

/// Text of the `value` attribute of the search input.
pub fn search_value(html: &str) -> Option<String> {
    let input = html.split(r#"id="q""#).next()?;
    let start = input.rfind(r#"value=""#)? + r#"value=""#.len();
    let rest = &input[start..];
    rest.find('"').map(|end| rest[..end].to_string())
}
