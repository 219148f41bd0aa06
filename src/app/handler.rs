//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place shell state changes in response to the
//! outside world. It never touches the contact store: it returns [`Action`]s
//! and the runtime reports their outcome back as events.
//!
//! # Event Types
//!
//! - **User**: `FollowLink`, `SearchInput`, `SubmitNewContact`, `Back`, `Forward`
//! - **Runtime**: `NavigationCompleted`, `Redirected`, `NavigationFailed`
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{handle_event, Action, Event, Location, ShellState};
//! use rolodex::routes::RouteData;
//!
//! let mut state = ShellState::new(Location::root(), RouteData::default(), "cupcake");
//! let (render, actions) = handle_event(&mut state, &Event::SearchInput { value: "ada".into() })?;
//! assert!(render);
//! assert!(matches!(&actions[..], [Action::Load { .. }]));
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

use super::actions::Action;
use super::location::Location;
use super::modes::HistoryMode;
use super::state::{NavigationId, ShellState};
use crate::domain::Result;
use crate::routes::RouteData;

/// Events triggered by the user or by finished actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Clicks a link (sidebar entry or any in-app href).
    FollowLink { href: String },

    /// The search input changed. Submits the search form immediately.
    SearchInput { value: String },

    /// Submits the "New" form.
    SubmitNewContact,

    /// Browser back button.
    Back,

    /// Browser forward button.
    Forward,

    /// Loaders for navigation `id` finished.
    NavigationCompleted { id: NavigationId, data: RouteData },

    /// The page action for navigation `id` answered with a redirect.
    Redirected { id: NavigationId, location: Location },

    /// A loader or action for navigation `id` failed.
    NavigationFailed { id: NavigationId, message: String },
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// The boolean is `true` when the view changed and needs rendering.
/// Completions of superseded navigations are dropped without effect.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that validate
/// input.
pub fn handle_event(state: &mut ShellState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::FollowLink { href } => {
            let location = Location::parse(href);
            Ok(load(state, location, HistoryMode::Push))
        }
        Event::SearchInput { value } => {
            state.search_input.clone_from(value);

            // Push vs. replace is decided by the committed page, not by the
            // navigation this keystroke starts.
            let mode = state.search_history.history_mode();
            let location = Location::root().with_query(value.clone());

            tracing::debug!(query = %value, history_mode = mode.as_str(), "search submitted");
            Ok(load(state, location, mode))
        }
        Event::SubmitNewContact => {
            // The form has no action, so it posts to the committed URL
            // including its query.
            let location = state.location.clone();
            let id = state.begin_navigation(location.clone(), HistoryMode::Push);
            Ok((true, vec![Action::Submit { id, location }]))
        }
        Event::Back => {
            let Some((index, location)) = state.history.back_entry() else {
                tracing::debug!("no earlier history entry");
                return Ok((false, vec![]));
            };
            let location = location.clone();
            Ok(load(state, location, HistoryMode::Traverse(index)))
        }
        Event::Forward => {
            let Some((index, location)) = state.history.forward_entry() else {
                tracing::debug!("no later history entry");
                return Ok((false, vec![]));
            };
            let location = location.clone();
            Ok(load(state, location, HistoryMode::Traverse(index)))
        }
        Event::NavigationCompleted { id, data } => {
            let Some(pending) = state.take_pending(*id) else {
                tracing::debug!(id = id.0, "discarding stale navigation result");
                return Ok((false, vec![]));
            };
            state.commit(pending, data.clone());
            Ok((true, vec![]))
        }
        Event::Redirected { id, location } => {
            let Some(pending) = state.take_pending(*id) else {
                tracing::debug!(id = id.0, "discarding stale redirect");
                return Ok((false, vec![]));
            };

            tracing::debug!(from = %pending.location, to = %location, "following redirect");
            Ok(load(state, location.clone(), pending.history_mode))
        }
        Event::NavigationFailed { id, message } => {
            let Some(pending) = state.take_pending(*id) else {
                tracing::debug!(id = id.0, "discarding stale navigation failure");
                return Ok((false, vec![]));
            };

            tracing::warn!(location = %pending.location, error = %message, "navigation failed");
            state.error = Some(message.clone());
            Ok((true, vec![]))
        }
    }
}

fn load(state: &mut ShellState, location: Location, mode: HistoryMode) -> (bool, Vec<Action>) {
    let id = state.begin_navigation(location.clone(), mode);
    (true, vec![Action::Load { id, location }])
}
