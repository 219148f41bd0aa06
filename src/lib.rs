//! Rolodex: a server-rendered contacts manager.
//!
//! A sidebar lists contacts with a search box and a "New" button; the main
//! pane shows the selected contact. The interesting part is the search
//! interaction: every keystroke is a GET navigation to `/?q=…`, the URL is the
//! source of truth for the query, the input is re-synchronized from it after
//! each navigation, and the first search pushes a history entry while later
//! ones replace it.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  HTTP server (main.rs, routes/)                     │  ← axum router
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell state machine (app/)                         │
//! │  - Locations and history                            │
//! │  - Event handling, pending navigations              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌─────────────────────────┐
//! │ UI Layer      │   │ Storage Layer           │
//! │ (ui/)         │   │ (storage/)              │
//! │ - HTML        │   │ - JSON / memory stores  │
//! │ - Components  │   │ - Fuzzy search, order   │
//! └───────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and observability/                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: shell state machine and in-process navigation session
//! - [`domain`]: contact model and errors
//! - [`routes`]: loaders, page action and the axum router
//! - [`storage`]: contact stores
//! - [`ui`]: HTML rendering
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! ```toml
//! bind_address = "127.0.0.1:3000"
//! data_file = "contacts.json"
//! theme = "cupcake"
//! trace_level = "debug"
//! trace_file = "traces/rolodex.json"
//! ```
//!
//! Every key can be overridden from the environment: `ROLODEX_BIND`,
//! `ROLODEX_DATA_FILE`, `ROLODEX_THEME`, `ROLODEX_TRACE_LEVEL`,
//! `ROLODEX_TRACE_FILE`.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{Event, Session};
//! use rolodex::storage::MemoryStorage;
//!
//! let mut session = Session::open(Box::new(MemoryStorage::new()), "/", "cupcake")?;
//! session.dispatch(Event::SubmitNewContact)?;
//! session.settle()?;
//!
//! assert!(session.state().location.path.ends_with("/edit"));
//! assert_eq!(session.state().history.len(), 2);
//! # Ok::<(), rolodex::RolodexError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod routes;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, Event, Location, Session, ShellState};
pub use domain::{Contact, Result, RolodexError};
pub use routes::{router, ServerState};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use storage::{ContactStore, JsonStorage, MemoryStorage};

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "cupcake";

/// Environment variables and the config keys they override.
const ENV_OVERRIDES: [(&str, &str); 5] = [
    ("ROLODEX_BIND", "bind_address"),
    ("ROLODEX_DATA_FILE", "data_file"),
    ("ROLODEX_THEME", "theme"),
    ("ROLODEX_TRACE_LEVEL", "trace_level"),
    ("ROLODEX_TRACE_FILE", "trace_file"),
];

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server listens on. Default: `127.0.0.1:3000`
    pub bind_address: SocketAddr,

    /// JSON file holding the contacts. `None` keeps them in memory.
    pub data_file: Option<PathBuf>,

    /// `data-theme` of the rendered documents. Default: `"cupcake"`
    pub theme: String,

    /// Filter directive used when `RUST_LOG` is unset. Default: `"info"`
    pub trace_level: Option<String>,

    /// Where to export spans as JSON lines. `None` disables the exporter.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_file: None,
            theme: DEFAULT_THEME.to_string(),
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::Config`] for invalid TOML, unknown keys or
    /// malformed values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rolodex::Config;
    ///
    /// let config = Config::from_toml(r#"theme = "dracula""#)?;
    /// assert_eq!(config.theme, "dracula");
    /// assert_eq!(config.bind_address.port(), 3000);
    /// # Ok::<(), rolodex::RolodexError>(())
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RolodexError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::Io`] if the file cannot be read, or
    /// [`RolodexError::Config`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|e| match e {
            RolodexError::Config(msg) => {
                RolodexError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Applies string overrides keyed by config field name.
    ///
    /// Empty values clear optional fields. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::Config`] if `bind_address` is not a socket
    /// address.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rolodex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("bind_address".to_string(), "0.0.0.0:8080".to_string());
    /// map.insert("data_file".to_string(), "contacts.json".to_string());
    ///
    /// let config = Config::default().with_overrides(&map)?;
    /// assert_eq!(config.bind_address.port(), 8080);
    /// assert!(config.data_file.is_some());
    /// # Ok::<(), rolodex::RolodexError>(())
    /// ```
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        let optional_path = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| PathBuf::from(value))
        };

        for (key, value) in overrides {
            match key.as_str() {
                "bind_address" => {
                    self.bind_address = value.trim().parse().map_err(|e| {
                        RolodexError::Config(format!("invalid bind_address {value:?}: {e}"))
                    })?;
                }
                "data_file" => self.data_file = optional_path(value),
                "theme" => {
                    if !value.trim().is_empty() {
                        self.theme = value.trim().to_string();
                    }
                }
                "trace_level" => {
                    self.trace_level = Some(value.trim().to_string()).filter(|v| !v.is_empty());
                }
                "trace_file" => self.trace_file = optional_path(value),
                _ => tracing::debug!(key = %key, "ignoring unknown config override"),
            }
        }

        Ok(self)
    }

    /// Collects the `ROLODEX_*` environment variables as overrides.
    #[must_use]
    pub fn env_overrides() -> BTreeMap<String, String> {
        ENV_OVERRIDES
            .iter()
            .filter_map(|(var, key)| {
                std::env::var(var)
                    .ok()
                    .map(|value| ((*key).to_string(), value))
            })
            .collect()
    }

    /// Loads the optional config file, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`] and [`Config::with_overrides`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(&Self::env_overrides())
    }
}

/// Opens the configured contact store and wraps it for the router.
///
/// # Errors
///
/// Returns storage or I/O errors from opening the JSON file.
///
/// # Example
///
/// ```rust
/// use rolodex::{initialize, Config};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.theme, "cupcake");
/// # Ok::<(), rolodex::RolodexError>(())
/// ```
pub fn initialize(config: &Config) -> Result<ServerState> {
    let store: Box<dyn ContactStore> = match &config.data_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening contact file");
            Box::new(JsonStorage::new(path.clone())?)
        }
        None => {
            tracing::info!("using in-memory contact store");
            Box::new(MemoryStorage::new())
        }
    };

    Ok(ServerState::new(store, config.theme.clone()))
}
