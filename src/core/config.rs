//! # Configuration
//!
//! Environment-driven settings for the backend connection.

use anyhow::{anyhow, Result};
use std::fmt;
use std::time::Duration;

/// Default backend base URL (local development server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default path of the reminders collection
pub const DEFAULT_REMINDERS_PATH: &str = "/api/reminders";

/// Default path of the expenses collection
pub const DEFAULT_EXPENSES_PATH: &str = "/api/expenses";

/// Default path of the categories collection
pub const DEFAULT_CATEGORIES_PATH: &str = "/api/categories";

/// Backend connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash
    pub api_base_url: String,
    /// Timeout applied to every request
    pub http_timeout: Duration,
    /// Resource path of the reminders collection
    pub reminders_path: String,
    /// Resource path of the expenses collection
    pub expenses_path: String,
    /// Resource path of the categories collection
    pub categories_path: String,
    /// Access token sent as `Authorization: Bearer` when set
    pub api_token: Option<String>,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("REMEX_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(anyhow!("REMEX_API_BASE_URL must not be empty"));
        }

        let timeout_secs = match lookup("REMEX_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow!("REMEX_HTTP_TIMEOUT_SECS must be a whole number of seconds: {}", e)
                })?;
                if secs == 0 {
                    return Err(anyhow!("REMEX_HTTP_TIMEOUT_SECS must be greater than zero"));
                }
                secs
            }
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let reminders_path =
            lookup("REMEX_REMINDERS_PATH").unwrap_or_else(|| DEFAULT_REMINDERS_PATH.to_string());
        let expenses_path =
            lookup("REMEX_EXPENSES_PATH").unwrap_or_else(|| DEFAULT_EXPENSES_PATH.to_string());
        let categories_path = lookup("REMEX_CATEGORIES_PATH")
            .unwrap_or_else(|| DEFAULT_CATEGORIES_PATH.to_string());

        // Blank token means anonymous
        let api_token = lookup("REMEX_API_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Config {
            api_base_url,
            http_timeout: Duration::from_secs(timeout_secs),
            reminders_path,
            expenses_path,
            categories_path,
            api_token,
        })
    }

    /// Join the base URL with a resource path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("reminders_path", &self.reminders_path)
            .field("expenses_path", &self.expenses_path)
            .field("categories_path", &self.categories_path)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            reminders_path: DEFAULT_REMINDERS_PATH.to_string(),
            expenses_path: DEFAULT_EXPENSES_PATH.to_string(),
            categories_path: DEFAULT_CATEGORIES_PATH.to_string(),
            api_token: None,
        }
    }
}
