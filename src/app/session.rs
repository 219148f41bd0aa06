//! In-process navigation runtime.
//!
//! [`Session`] plays the part a browser plus routing framework plays for the
//! HTTP surface: it owns a contact store and the shell state, executes the
//! actions the event handler emits and feeds their outcomes back as events.
//!
//! Actions are queued rather than run eagerly so callers can observe the
//! pending state between dispatching an event and its completion:
//!
//! ```rust
//! use rolodex::app::{Event, Session};
//! use rolodex::storage::MemoryStorage;
//!
//! let mut session = Session::open(Box::new(MemoryStorage::new()), "/", "cupcake")?;
//! session.dispatch(Event::SearchInput { value: "ada".into() })?;
//! assert!(session.state().searching());
//!
//! session.settle()?;
//! assert!(!session.state().searching());
//! assert_eq!(session.state().search_input, "ada");
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::location::Location;
use super::state::ShellState;
use crate::domain::Result;
use crate::routes;
use crate::storage::ContactStore;
use crate::ui;
use std::collections::VecDeque;

/// Shell state bound to a store, with a queue of actions awaiting execution.
pub struct Session {
    state: ShellState,
    store: Box<dyn ContactStore>,
    in_flight: VecDeque<Action>,
}

impl Session {
    /// Loads `href` directly, as if typed into the address bar.
    ///
    /// # Errors
    ///
    /// Returns the loader error for the initial page (for example
    /// [`NotFound`](crate::RolodexError::NotFound) for an unknown contact).
    pub fn open(
        store: Box<dyn ContactStore>,
        href: &str,
        theme: impl Into<String>,
    ) -> Result<Self> {
        let location = Location::parse(href);
        let _span = tracing::debug_span!("open_session", location = %location).entered();

        let data = routes::resolve(store.as_ref(), &location)?;

        Ok(Self {
            state: ShellState::new(location, data, theme),
            store,
            in_flight: VecDeque::new(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }

    /// Actions emitted but not yet executed, oldest first.
    #[must_use]
    pub const fn in_flight(&self) -> &VecDeque<Action> {
        &self.in_flight
    }

    /// Handles `event` and queues the actions it emits.
    ///
    /// Returns `true` if the view needs re-rendering.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (needs_render, actions) = handle_event(&mut self.state, &event)?;
        self.in_flight.extend(actions);
        Ok(needs_render)
    }

    /// Executes the oldest queued action and dispatches its outcome.
    ///
    /// Returns `false` when the queue was empty. Store failures do not
    /// surface here; they become [`Event::NavigationFailed`].
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn step(&mut self) -> Result<bool> {
        let Some(action) = self.in_flight.pop_front() else {
            return Ok(false);
        };

        let event = match action {
            Action::Load { id, location } => {
                match routes::resolve(self.store.as_ref(), &location) {
                    Ok(data) => Event::NavigationCompleted { id, data },
                    Err(e) => Event::NavigationFailed {
                        id,
                        message: e.to_string(),
                    },
                }
            }
            Action::Submit { id, location } => {
                tracing::debug!(form_action = %location, "submitting new contact form");
                match routes::root::action(self.store.as_mut()) {
                    Ok(target) => Event::Redirected {
                        id,
                        location: target,
                    },
                    Err(e) => Event::NavigationFailed {
                        id,
                        message: e.to_string(),
                    },
                }
            }
        };

        self.dispatch(event)?;
        Ok(true)
    }

    /// Runs queued actions until none are left.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Session::step`].
    pub fn settle(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    /// Renders the current state as an HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        ui::render(&self.state)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
