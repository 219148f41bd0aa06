//! HTTP surface and route data loading.
//!
//! Route data is produced by plain functions over a [`ContactStore`] so the
//! same loaders serve both the axum handlers and the in-process navigation
//! [`Session`](crate::app::Session).
//!
//! # Routes
//!
//! | Method | Path | Behaviour |
//! |---|---|---|
//! | GET | `/`, `/contacts/{id}`, `/contacts/{id}/edit` | shell document, honours `?q=` |
//! | POST | same paths | create contact, `302` to its edit view |
//! | GET | `/brand-icon.svg` | brand icon |
//!
//! # Modules
//!
//! - [`root`]: page loader and page action
//! - [`outlet`]: route recognition and nested loaders
//! - `handlers`: axum handlers and the HTTP error boundary
//! - `assets`: static assets

mod assets;
mod handlers;
pub mod outlet;
pub mod root;

pub use outlet::{OutletData, Route};
pub use root::LoaderData;

use crate::app::Location;
use crate::domain::{Result, RolodexError};
use crate::storage::ContactStore;
use axum::routing::get;
use axum::Router;
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Everything a navigation produces: the shell's data and the outlet's data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteData {
    pub root: LoaderData,
    pub outlet: OutletData,
}

/// Runs the root loader and the nested loader for `location`.
///
/// # Errors
///
/// Returns [`RolodexError::NotFound`] for unknown paths or contacts, and any
/// store error.
pub fn resolve(store: &dyn ContactStore, location: &Location) -> Result<RouteData> {
    let route = Route::recognize(&location.path)
        .ok_or_else(|| RolodexError::NotFound(format!("no route for {}", location.path)))?;

    let root = root::loader(store, location)?;
    let outlet = outlet::load(store, &route)?;

    Ok(RouteData { root, outlet })
}

/// Contact store shared between request handlers.
pub type SharedStore = Arc<Mutex<Box<dyn ContactStore>>>;

/// Shared server state for axum handlers.
#[derive(Clone)]
pub struct ServerState {
    pub store: SharedStore,
    /// Value of the document's `data-theme` attribute.
    pub theme: String,
}

impl ServerState {
    /// Wraps a store for sharing across handlers.
    #[must_use]
    pub fn new(store: Box<dyn ContactStore>, theme: impl Into<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            theme: theme.into(),
        }
    }

    /// Locks the store for one facade call.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a previous holder panicked.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, Box<dyn ContactStore>>> {
        self.store
            .lock()
            .map_err(|e| RolodexError::Storage(format!("contact store lock poisoned: {e}")))
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// Builds the application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::document).post(handlers::create_contact))
        .route(
            "/contacts/:id",
            get(handlers::document).post(handlers::create_contact),
        )
        .route(
            "/contacts/:id/edit",
            get(handlers::document).post(handlers::create_contact),
        )
        .route(assets::BRAND_ICON_PATH, get(assets::brand_icon))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
