//! Shell state machine: locations, history, events and actions.
//!
//! This layer sits between the route loaders and the view. It decides what a
//! user interaction means for the URL, the history stack and the search box,
//! and which loader or action has to run.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Loaders
//!                           ↑                                       ↓
//!                           └────────── Completion Events ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: loader and action requests emitted by the handler
//! - [`handler`]: event processing and state transitions
//! - [`history`]: browser-style history stack
//! - [`location`]: path plus `q` parameter
//! - [`modes`]: search status and history policy enums
//! - [`session`]: in-process runtime executing actions
//! - [`state`]: shell state and view model computation

pub mod actions;
pub mod handler;
pub mod history;
pub mod location;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use history::History;
pub use location::{Location, SEARCH_PARAM};
pub use modes::{HistoryMode, LinkState, SearchHistory, SearchStatus};
pub use session::Session;
pub use state::{NavigationId, PendingNavigation, ShellState};
