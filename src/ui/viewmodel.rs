//! View model types representing renderable shell state.
//!
//! View models are computed by [`ShellState::compute_viewmodel`] and consumed
//! by the renderer. They hold display-ready data only: names are already
//! joined, link states already resolved, the empty state already decided.
//!
//! [`ShellState::compute_viewmodel`]: crate::app::ShellState::compute_viewmodel
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{HistoryMode, LinkState, SearchStatus};
//! use rolodex::ui::viewmodel::{
//!     ContactEntry, HeaderInfo, OutletView, SearchBarInfo, ShellViewModel,
//! };
//!
//! let vm = ShellViewModel {
//!     theme: "cupcake".to_string(),
//!     header: HeaderInfo { title: "Contacts".to_string() },
//!     search_bar: SearchBarInfo {
//!         value: String::new(),
//!         status: SearchStatus::Idle,
//!         history_mode: HistoryMode::Push,
//!     },
//!     contacts: vec![ContactEntry {
//!         name: Some("Ada Lovelace".to_string()),
//!         favorite: true,
//!         href: "/contacts/1".to_string(),
//!         link_state: LinkState::Inactive,
//!     }],
//!     empty_state: None,
//!     outlet: OutletView::Index,
//! };
//! assert_eq!(vm.contacts.len(), 1);
//! ```

use crate::app::{HistoryMode, LinkState, SearchStatus};
use crate::domain::Contact;

/// Complete view model for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellViewModel {
    /// `data-theme` attribute of the `<html>` element.
    pub theme: String,

    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// Sidebar entries in loader order.
    pub contacts: Vec<ContactEntry>,

    /// Present exactly when `contacts` is empty.
    pub empty_state: Option<EmptyState>,

    pub outlet: OutletView,
}

/// Navbar title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Search form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Value of the `q` input.
    pub value: String,

    /// `Searching` dims the input and shows the spinner.
    pub status: SearchStatus,

    /// How the next submission updates history.
    pub history_mode: HistoryMode,
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    /// "First Last", or `None` for the "No Name" placeholder.
    pub name: Option<String>,
    pub favorite: bool,
    pub href: String,
    pub link_state: LinkState,
}

/// Shown in place of the contact list when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// What the content outlet shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutletView {
    Index,
    Contact(ContactCard),
    EditContact(ContactCard),
    /// The last navigation failed.
    Error { message: String },
}

/// Read-only contact details for the outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: Option<String>,
    pub first: String,
    pub last: String,
    pub favorite: bool,
    pub href: String,
    pub edit_href: String,
}

impl From<&Contact> for ContactCard {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.display_name(),
            first: contact.first.clone().unwrap_or_default(),
            last: contact.last.clone().unwrap_or_default(),
            favorite: contact.favorite,
            href: contact.href(),
            edit_href: contact.edit_href(),
        }
    }
}
