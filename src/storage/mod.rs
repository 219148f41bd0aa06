//! Storage layer: the contact data access facade.
//!
//! The page loader and page action only see the [`ContactStore`] trait.
//! Two backends implement it: a JSON document on disk and an in-memory map.
//!
//! # Modules
//!
//! - `backend`: the `ContactStore` trait
//! - `json`: JSON file-based store with atomic writes
//! - `memory`: in-memory store
//! - `search`: query matching and display ordering shared by both backends
//! - `models`: storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;
pub mod search;

pub use backend::ContactStore;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::ContactRecord;
