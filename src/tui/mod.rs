//! # TUI Module
//!
//! Terminal user interface for browsing reminders.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true (cargo feature `tui`)
//!
//! ## Changelog
//! - 1.1.0: Log to a file instead of stderr while the TUI owns the terminal
//! - 1.0.0: Initial TUI implementation with reminders list and help screen

pub mod app;
pub mod event;
pub mod logging;
pub mod ui;

pub use app::{App, Screen};
pub use event::{Event, EventHandler};
