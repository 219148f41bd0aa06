//! Actions representing side effects the navigation runtime executes.
//!
//! The event handler never talks to the contact store. It returns actions;
//! the runtime ([`Session`](crate::app::Session)) runs them against the page
//! loader and page action and feeds the outcome back as events.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{Action, Location, NavigationId};
//!
//! let action = Action::Load {
//!     id: NavigationId(1),
//!     location: Location::root().with_query("ada"),
//! };
//! assert_eq!(action.id(), NavigationId(1));
//! ```

use super::location::Location;
use super::state::NavigationId;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs the loaders for `location` (GET navigation).
    ///
    /// Completes with `Event::NavigationCompleted` or `Event::NavigationFailed`.
    Load {
        id: NavigationId,
        location: Location,
    },

    /// Posts the "new contact" form to `location`'s route action.
    ///
    /// Completes with `Event::Redirected` or `Event::NavigationFailed`.
    Submit {
        id: NavigationId,
        location: Location,
    },
}

impl Action {
    /// Navigation this action belongs to.
    #[must_use]
    pub const fn id(&self) -> NavigationId {
        match self {
            Self::Load { id, .. } | Self::Submit { id, .. } => *id,
        }
    }
}
