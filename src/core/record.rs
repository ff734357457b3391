//! # Domain Records
//!
//! Opaque JSON records (reminders, expenses) as returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the identifier field used as the render key
pub const ID_FIELD: &str = "id";

/// One item of a fetched collection.
///
/// The backend owns the shape; nothing is validated here. Field access
/// yields display text and treats absent values as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainRecord(Value);

/// Ordered records in server response order
pub type RecordCollection = Vec<DomainRecord>;

impl DomainRecord {
    pub fn new(value: Value) -> Self {
        DomainRecord(value)
    }

    /// Identifier as display text
    pub fn id(&self) -> String {
        self.field(ID_FIELD)
    }

    /// Field value as display text.
    ///
    /// Strings are returned verbatim, other scalars as their JSON text,
    /// `null` and missing fields as an empty string.
    pub fn field(&self, name: &str) -> String {
        match self.0.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for DomainRecord {
    fn from(value: Value) -> Self {
        DomainRecord(value)
    }
}
