//! State machine enums for the shell.
//!
//! # State Machine
//!
//! The search box is either **idle** or **searching**. It is searching exactly
//! while a navigation is in flight whose target carries a `q` parameter.
//!
//! Independently, [`SearchHistory`] records whether the committed location
//! already has a query. That flag decides whether the next search submission
//! pushes a history entry or replaces the current one.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{HistoryMode, SearchHistory};
//!
//! assert_eq!(SearchHistory::from_query(None).history_mode(), HistoryMode::Push);
//! assert_eq!(SearchHistory::from_query(Some("a")).history_mode(), HistoryMode::Replace);
//! ```

/// Visual state of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search navigation in flight.
    Idle,

    /// A navigation to a `?q=` location is pending.
    ///
    /// The input background is dimmed and the spinner is shown.
    Searching,
}

/// Whether the committed location already carries a search query.
///
/// Derived from the current (pre-submission) query, never from the target of
/// the submission: typing into an unsearched page pushes even if an earlier
/// keystroke's navigation is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHistory {
    /// The committed URL has no `q` parameter. The next search pushes.
    Unsearched,

    /// The committed URL has a `q` parameter. Further searches replace.
    Searched,
}

impl SearchHistory {
    /// Derives the flag from a committed query.
    #[must_use]
    pub const fn from_query(query: Option<&str>) -> Self {
        if query.is_some() {
            Self::Searched
        } else {
            Self::Unsearched
        }
    }

    /// History mode for the next search submission.
    #[must_use]
    pub const fn history_mode(self) -> HistoryMode {
        match self {
            Self::Unsearched => HistoryMode::Push,
            Self::Searched => HistoryMode::Replace,
        }
    }
}

/// How a navigation updates the history once it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Adds a new entry.
    Push,

    /// Overwrites the current entry.
    Replace,

    /// Back/forward: moves the history cursor to the given entry.
    Traverse(usize),
}

impl HistoryMode {
    /// Attribute value the search form carries so the browser script can
    /// choose between `location.assign` and `location.replace`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Replace => "replace",
            Self::Traverse(_) => "traverse",
        }
    }
}

/// Highlight state of a contact link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// The link points at the current route (or an ancestor of it).
    Active,

    /// The link is the target of the pending navigation.
    Pending,

    /// Neither.
    Inactive,
}
