//! Shell state and view model computation.
//!
//! [`ShellState`] is the single source of truth for everything the shell
//! renders: the committed location and its loader data, the value typed into
//! the search box, the pending navigation (if any) and the session history.
//! The view is derived from it on demand by [`ShellState::compute_viewmodel`].
//!
//! # Commit
//!
//! A navigation is started by [`ShellState::begin_navigation`] and finished by
//! [`ShellState::commit`]. Committing is the only place the history, the
//! location and the loader data change together, and it runs the search input
//! synchronization step exactly once.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{HistoryMode, Location, ShellState};
//! use rolodex::routes::RouteData;
//!
//! let mut state = ShellState::new(Location::root(), RouteData::default(), "cupcake");
//! let target = Location::root().with_query("ada");
//! let id = state.begin_navigation(target, HistoryMode::Push);
//! assert!(state.searching());
//!
//! let pending = state.take_pending(id).expect("pending navigation");
//! state.commit(pending, RouteData::default());
//! assert!(!state.searching());
//! assert_eq!(state.history.len(), 2);
//! ```

use super::history::History;
use super::location::Location;
use super::modes::{HistoryMode, LinkState, SearchHistory, SearchStatus};
use crate::domain::Contact;
use crate::routes::{LoaderData, OutletData, RouteData};
use crate::ui::viewmodel::{
    ContactCard, ContactEntry, EmptyState, HeaderInfo, OutletView, SearchBarInfo, ShellViewModel,
};

/// Identifies one navigation. Later navigations have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationId(pub u64);

/// A navigation that has started but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub id: NavigationId,
    pub location: Location,
    pub history_mode: HistoryMode,
}

/// Transient shell state.
#[derive(Debug, Clone)]
pub struct ShellState {
    /// Location of the committed page.
    pub location: Location,

    /// Root loader data for `location`.
    pub data: LoaderData,

    /// Nested route data for `location`.
    pub outlet: OutletData,

    /// What the search input currently displays.
    ///
    /// Set by typing and by the synchronization step after a navigation
    /// whose query differs from the previous one.
    pub search_input: String,

    /// Whether `location` carries a query; decides push vs. replace.
    pub search_history: SearchHistory,

    /// The in-flight navigation. Starting another supersedes it.
    pub navigation: Option<PendingNavigation>,

    pub history: History,

    /// Message from the last failed navigation, cleared by the next commit.
    pub error: Option<String>,

    /// Value of the document's `data-theme` attribute.
    pub theme: String,

    next_id: u64,
}

impl ShellState {
    /// Creates the state for a page that was loaded directly.
    #[must_use]
    pub fn new(location: Location, data: RouteData, theme: impl Into<String>) -> Self {
        let search_input = location.query.clone().unwrap_or_default();
        let search_history = SearchHistory::from_query(location.query.as_deref());

        Self {
            history: History::new(location.clone()),
            location,
            data: data.root,
            outlet: data.outlet,
            search_input,
            search_history,
            navigation: None,
            error: None,
            theme: theme.into(),
            next_id: 1,
        }
    }

    /// `true` while a navigation to a location with a `q` parameter is pending.
    #[must_use]
    pub fn searching(&self) -> bool {
        self.navigation
            .as_ref()
            .is_some_and(|pending| pending.location.has_search())
    }

    /// [`SearchStatus::Searching`] exactly when [`searching`](Self::searching).
    #[must_use]
    pub fn search_status(&self) -> SearchStatus {
        if self.searching() {
            SearchStatus::Searching
        } else {
            SearchStatus::Idle
        }
    }

    /// Starts a navigation, superseding any pending one.
    pub fn begin_navigation(
        &mut self,
        location: Location,
        history_mode: HistoryMode,
    ) -> NavigationId {
        let id = NavigationId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = &self.navigation {
            tracing::debug!(
                superseded = previous.id.0,
                by = id.0,
                "pending navigation superseded"
            );
        }

        self.navigation = Some(PendingNavigation {
            id,
            location,
            history_mode,
        });
        id
    }

    /// Removes and returns the pending navigation if its id is `id`.
    ///
    /// Returns `None` for completions of superseded navigations.
    pub fn take_pending(&mut self, id: NavigationId) -> Option<PendingNavigation> {
        if self.navigation.as_ref().is_some_and(|pending| pending.id == id) {
            self.navigation.take()
        } else {
            None
        }
    }

    /// `true` if `id` is the pending navigation.
    #[must_use]
    pub fn is_pending(&self, id: NavigationId) -> bool {
        self.navigation.as_ref().is_some_and(|pending| pending.id == id)
    }

    /// Commits a finished navigation.
    ///
    /// Applies the history mode, swaps in the new data and runs the search
    /// input synchronization step.
    pub fn commit(&mut self, pending: PendingNavigation, data: RouteData) {
        let _span = tracing::debug_span!(
            "commit_navigation",
            id = pending.id.0,
            location = %pending.location,
            history_mode = pending.history_mode.as_str()
        )
        .entered();

        match pending.history_mode {
            HistoryMode::Push => self.history.push(pending.location.clone()),
            HistoryMode::Replace => self.history.replace(pending.location.clone()),
            HistoryMode::Traverse(index) => self.history.go_to(index),
        }

        let previous_query = self.data.query.take();
        self.location = pending.location;
        self.data = data.root;
        self.outlet = data.outlet;
        self.search_history = SearchHistory::from_query(self.data.query.as_deref());
        self.error = None;

        self.sync_search_input(previous_query.as_deref());
    }

    /// Sets the search input to the committed query when it changed.
    ///
    /// Returns `true` if the input was overwritten. When the query is the same
    /// as before, whatever the user typed stays.
    pub fn sync_search_input(&mut self, previous_query: Option<&str>) -> bool {
        let current = self.data.query.as_deref();
        if current == previous_query {
            return false;
        }

        self.search_input = current.unwrap_or_default().to_string();
        tracing::debug!(value = %self.search_input, "search input synchronized");
        true
    }

    /// Highlight state of a sidebar link to `href`.
    #[must_use]
    pub fn link_state(&self, href: &str) -> LinkState {
        if self.location.is_within(href) {
            LinkState::Active
        } else if self
            .navigation
            .as_ref()
            .is_some_and(|pending| pending.location.is_within(href))
        {
            LinkState::Pending
        } else {
            LinkState::Inactive
        }
    }

    /// Computes the renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ShellViewModel {
        let contacts: Vec<ContactEntry> = self
            .data
            .contacts
            .iter()
            .map(|contact| self.compute_entry(contact))
            .collect();

        let empty_state = contacts.is_empty().then(|| EmptyState {
            message: "No contacts".to_string(),
        });

        ShellViewModel {
            theme: self.theme.clone(),
            header: HeaderInfo {
                title: "Contacts".to_string(),
            },
            search_bar: SearchBarInfo {
                value: self.search_input.clone(),
                status: self.search_status(),
                history_mode: self.search_history.history_mode(),
            },
            contacts,
            empty_state,
            outlet: self.compute_outlet(),
        }
    }

    fn compute_entry(&self, contact: &Contact) -> ContactEntry {
        let href = contact.href();
        ContactEntry {
            name: contact.display_name(),
            favorite: contact.favorite,
            link_state: self.link_state(&href),
            href,
        }
    }

    fn compute_outlet(&self) -> OutletView {
        if let Some(message) = &self.error {
            return OutletView::Error {
                message: message.clone(),
            };
        }

        match &self.outlet {
            OutletData::Index => OutletView::Index,
            OutletData::Contact(contact) => OutletView::Contact(ContactCard::from(contact)),
            OutletData::EditContact(contact) => {
                OutletView::EditContact(ContactCard::from(contact))
            }
        }
    }
}
