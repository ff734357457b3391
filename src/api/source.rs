//! Collection sources
//!
//! The capability a view depends on to obtain its records.

use crate::api::fetch::{absorb_failure, collection_field, try_fetch_collection, FetchError};
use crate::core::{Config, RecordCollection};
use async_trait::async_trait;
use log::info;

/// Something that can produce a record collection asynchronously
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Fetch, reporting failure to the caller
    async fn try_fetch(&self) -> Result<RecordCollection, FetchError>;

    /// Fetch, logging any failure and returning an empty collection instead
    async fn fetch(&self) -> RecordCollection {
        absorb_failure(self.name(), self.try_fetch().await)
    }
}

/// A collection served by the backend over HTTP
#[derive(Clone)]
pub struct RemoteCollection {
    client: reqwest::Client,
    url: String,
    field: String,
    token: Option<String>,
}

impl RemoteCollection {
    pub fn new(client: reqwest::Client, url: impl Into<String>, field: impl Into<String>) -> Self {
        RemoteCollection {
            client,
            url: url.into(),
            field: field.into(),
            token: None,
        }
    }

    /// Authenticate every request with a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build a source for `path` under the configured base URL.
    ///
    /// The envelope field is named after the last path segment. The
    /// configured token, if any, is attached to each request.
    pub fn from_config(config: &Config, path: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(FetchError::Client)?;

        let url = config.endpoint_url(path);
        let field = collection_field(path);
        info!(
            "Collection source configured for {} (field `{}`, {})",
            url,
            field,
            if config.api_token.is_some() { "authenticated" } else { "anonymous" }
        );

        let source = Self::new(client, url, field);
        Ok(match &config.api_token {
            Some(token) => source.with_token(token.clone()),
            None => source,
        })
    }

    pub fn reminders(config: &Config) -> Result<Self, FetchError> {
        Self::from_config(config, &config.reminders_path)
    }

    pub fn expenses(config: &Config) -> Result<Self, FetchError> {
        Self::from_config(config, &config.expenses_path)
    }

    pub fn categories(config: &Config) -> Result<Self, FetchError> {
        Self::from_config(config, &config.categories_path)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for RemoteCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCollection")
            .field("url", &self.url)
            .field("field", &self.field)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

#[async_trait]
impl CollectionSource for RemoteCollection {
    fn name(&self) -> &str {
        &self.url
    }

    async fn try_fetch(&self) -> Result<RecordCollection, FetchError> {
        try_fetch_collection(&self.client, &self.url, &self.field, self.token.as_deref()).await
    }
}

/// A fixed in-memory collection
#[derive(Debug, Clone, Default)]
pub struct StaticCollection {
    records: RecordCollection,
}

impl StaticCollection {
    pub fn new(records: RecordCollection) -> Self {
        StaticCollection { records }
    }
}

#[async_trait]
impl CollectionSource for StaticCollection {
    fn name(&self) -> &str {
        "static"
    }

    async fn try_fetch(&self) -> Result<RecordCollection, FetchError> {
        Ok(self.records.clone())
    }
}

/// Fetch the configured reminders collection, empty on failure
pub async fn get_reminders(config: &Config) -> RecordCollection {
    fetch_configured(config, &config.reminders_path).await
}

/// Fetch the configured expenses collection, empty on failure
pub async fn get_expenses(config: &Config) -> RecordCollection {
    fetch_configured(config, &config.expenses_path).await
}

/// Fetch the configured categories collection, empty on failure
pub async fn get_categories(config: &Config) -> RecordCollection {
    fetch_configured(config, &config.categories_path).await
}

async fn fetch_configured(config: &Config, path: &str) -> RecordCollection {
    let source = RemoteCollection::from_config(config, path);
    fetch_or_absorb(&config.endpoint_url(path), source).await
}

/// One error entry whether the source could not be built or the fetch failed
async fn fetch_or_absorb(
    origin: &str,
    source: Result<RemoteCollection, FetchError>,
) -> RecordCollection {
    match source {
        Ok(source) => source.fetch().await,
        Err(e) => absorb_failure(origin, Err(e)),
    }
}
