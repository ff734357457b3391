//! # Core Module
//!
//! Shared record types and configuration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config and record modules

pub mod config;
pub mod record;

pub use config::Config;
pub use record::{DomainRecord, RecordCollection};
