//! # Display Nodes
//!
//! Pure mapping from view state to keyed, ordered display nodes.

use crate::core::record::ID_FIELD;
use crate::view::ViewState;
use std::fmt;

/// Which record fields a view keys by and shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    /// Field used as the stable node key
    pub key: String,
    /// Fields shown per record, in display order
    pub shown: Vec<String>,
}

impl DisplayFields {
    pub fn new(key: impl Into<String>, shown: &[&str]) -> Self {
        DisplayFields {
            key: key.into(),
            shown: shown.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Reminder summary: title, description, date
    pub fn reminder() -> Self {
        Self::new(ID_FIELD, &["title", "description", "date"])
    }

    /// Expense summary: title, description, amount, date
    pub fn expense() -> Self {
        Self::new(ID_FIELD, &["title", "description", "amount", "date"])
    }

    /// Category summary: name, description
    pub fn category() -> Self {
        Self::new(ID_FIELD, &["name", "description"])
    }
}

/// One rendered record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub key: String,
    /// Field values verbatim, aligned with [`DisplayFields::shown`]
    pub values: Vec<String>,
}

/// A labelled section of display nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub heading: String,
    pub nodes: Vec<DisplayNode>,
    /// Set only for a surfaced fetch failure
    pub notice: Option<String>,
}

/// Render a section from the current state.
///
/// Nodes follow collection order. Missing fields render as empty text.
pub fn render_section(heading: &str, fields: &DisplayFields, state: &ViewState) -> RenderedSection {
    let nodes = state
        .records()
        .iter()
        .map(|record| DisplayNode {
            key: record.field(&fields.key),
            values: fields.shown.iter().map(|name| record.field(name)).collect(),
        })
        .collect();

    RenderedSection {
        heading: heading.to_string(),
        nodes,
        notice: state.failure().map(|reason| format!("Could not load: {}", reason)),
    }
}

impl fmt::Display for RenderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        for node in &self.nodes {
            writeln!(f)?;
            for value in &node.values {
                writeln!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
