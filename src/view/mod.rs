//! # View Module
//!
//! Record list views that fetch their collection once per mount and render
//! it as keyed display nodes. Rendering is framework-neutral; the TUI and
//! the headless lister both draw from [`RenderedSection`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial creation with list view, view state and display nodes

mod list;
mod node;
mod state;

pub use list::{FailurePolicy, RecordListView};
pub use node::{render_section, DisplayFields, DisplayNode, RenderedSection};
pub use state::ViewState;
