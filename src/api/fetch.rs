//! Remote collection fetch
//!
//! One GET per call, no retries. [`try_fetch_collection`] reports the
//! failure; [`fetch_collection`] logs it and degrades to an empty collection.

use crate::core::{DomainRecord, RecordCollection};
use log::{debug, error};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Why a collection could not be obtained
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no `{0}` field")]
    MissingField(String),

    #[error("`{field}` is {kind}, not an array")]
    NotACollection { field: String, kind: &'static str },
}

/// Derive the envelope field name from a resource path.
///
/// `/api/expenses` -> `expenses`. Query strings and trailing slashes are ignored.
pub fn collection_field(path: &str) -> &str {
    let path = path.split('?').next().unwrap_or(path);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Fetch a collection, reporting failure to the caller.
///
/// `token`, when given, is sent as `Authorization: Bearer <token>`.
pub async fn try_fetch_collection(
    client: &reqwest::Client,
    url: &str,
    field: &str,
    token: Option<&str>,
) -> Result<RecordCollection, FetchError> {
    let mut request = client.get(url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await.map_err(FetchError::Body)?;
    let envelope: Value = serde_json::from_slice(&body)?;

    extract_collection(envelope, field)
}

/// Fetch a collection, returning an empty one on any failure.
///
/// Failures are logged once at error level and never reach the caller.
pub async fn fetch_collection(
    client: &reqwest::Client,
    url: &str,
    field: &str,
    token: Option<&str>,
) -> RecordCollection {
    absorb_failure(url, try_fetch_collection(client, url, field, token).await)
}

/// Pull the named array out of a decoded envelope
pub fn extract_collection(mut envelope: Value, field: &str) -> Result<RecordCollection, FetchError> {
    match envelope.get_mut(field).map(Value::take) {
        None => Err(FetchError::MissingField(field.to_string())),
        Some(Value::Array(items)) => Ok(items.into_iter().map(DomainRecord::new).collect()),
        Some(other) => Err(FetchError::NotACollection {
            field: field.to_string(),
            kind: json_kind(&other),
        }),
    }
}

pub(crate) fn absorb_failure(
    origin: &str,
    result: Result<RecordCollection, FetchError>,
) -> RecordCollection {
    match result {
        Ok(records) => {
            debug!("Fetched {} records from {}", records.len(), origin);
            records
        }
        Err(e) => {
            error!("Error fetching {}: {}", origin, e);
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
