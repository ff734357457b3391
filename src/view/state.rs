//! # View State
//!
//! The snapshot a record list view renders from. Replaced wholesale on
//! every transition.

use crate::core::{DomainRecord, RecordCollection};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing fetched yet in this mount
    #[default]
    Empty,
    /// The collection returned by the fetch, possibly empty
    Loaded(RecordCollection),
    /// The fetch failed and the view was configured to keep the reason
    Failed(String),
}

impl ViewState {
    /// Records to render, empty unless loaded
    pub fn records(&self) -> &[DomainRecord] {
        match self {
            ViewState::Loaded(records) => records,
            ViewState::Empty | ViewState::Failed(_) => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ViewState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
