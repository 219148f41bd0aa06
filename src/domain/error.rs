//! Error types for the Rolodex application.
//!
//! This module defines the centralized error type [`RolodexError`] and a type alias
//! [`Result`] used by the storage layer, the page loader/action and the HTTP
//! surface. All errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// The main error type for Rolodex operations.
///
/// Every failure of the contact store, of configuration loading or of a route
/// lookup ends up here. The HTTP layer maps it to a status code in its error
/// boundary; the in-process navigation session stores it on the shell state.
///
/// # Examples
///
/// ```
/// use rolodex::RolodexError;
///
/// fn read_storage() -> Result<(), RolodexError> {
///     Err(RolodexError::Storage("Failed to read file".to_string()))
/// }
///
/// assert!(read_storage().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RolodexError {
    /// Storage operation failed.
    ///
    /// Occurs when reading, parsing or writing the contact store fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or socket I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A routed resource (usually a contact id) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl RolodexError {
    /// Returns `true` for errors the error boundary reports as 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized `Result` type for Rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;
