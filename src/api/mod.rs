//! # API Module
//!
//! Client side of the backend's collection endpoints.
//!
//! Each collection lives at a fixed path and is served as a JSON envelope
//! whose field is named after the collection:
//!
//! ```text
//! GET /api/expenses  ->  {"expenses": [{"id": 1, ...}, ...]}
//! ```
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial creation with fetch helpers and collection sources

pub mod fetch;
pub mod source;

pub use fetch::{
    collection_field, extract_collection, fetch_collection, try_fetch_collection, FetchError,
};
pub use source::{
    get_categories, get_expenses, get_reminders, CollectionSource, RemoteCollection,
    StaticCollection,
};
