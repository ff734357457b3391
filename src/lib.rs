// Core layer - record types and configuration
pub mod core;

// API layer - remote collection fetching
pub mod api;

// View layer - fetch-on-mount record lists
pub mod view;

// TUI layer - terminal user interface (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{Config, DomainRecord, RecordCollection};

pub use api::{
    fetch_collection, get_categories, get_expenses, get_reminders, try_fetch_collection,
    CollectionSource, FetchError, RemoteCollection, StaticCollection,
};

pub use view::{DisplayFields, DisplayNode, FailurePolicy, RecordListView, RenderedSection, ViewState};
