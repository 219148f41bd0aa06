//! Domain layer for Rolodex.
//!
//! Core types independent of HTTP, storage formats and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`contact`]: Contact model and display rules
//!
//! # Examples
//!
//! ```
//! use rolodex::domain::{Contact, Result};
//!
//! fn create_contact() -> Result<Contact> {
//!     Ok(Contact::empty("abc123"))
//! }
//! # assert!(create_contact().is_ok());
//! ```

pub mod contact;
pub mod error;

pub use contact::Contact;
pub use error::{Result, RolodexError};
