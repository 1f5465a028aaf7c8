//! Faculty store connection settings

use faculty_common::{FacultyError, Result};
use serde::{Deserialize, Serialize};

/// Table the loader writes to unless overridden.
pub const DEFAULT_TABLE: &str = "faculty";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a PostgREST-compatible faculty store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL (e.g., "https://abc.supabase.co")
    pub base_url: String,

    /// API key, sent both as `apikey` and as a bearer token
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Target table name
    pub table: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Load from the environment, reading a `.env` file first if present
    ///
    /// - `FACULTY_STORE_URL`
    /// - `FACULTY_STORE_KEY`
    /// - `FACULTY_STORE_TABLE` (default `faculty`)
    /// - `FACULTY_STORE_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = std::env::var("FACULTY_STORE_URL") {
            config.base_url = url;
        }

        if let Ok(key) = std::env::var("FACULTY_STORE_KEY") {
            config.api_key = key;
        }

        if let Ok(table) = std::env::var("FACULTY_STORE_TABLE") {
            config.table = table;
        }

        if let Ok(timeout) = std::env::var("FACULTY_STORE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                FacultyError::config(format!(
                    "FACULTY_STORE_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(FacultyError::config("store URL is not set (FACULTY_STORE_URL)"));
        }

        if self.api_key.trim().is_empty() {
            return Err(FacultyError::config("store API key is not set (FACULTY_STORE_KEY)"));
        }

        if self.table.trim().is_empty() {
            return Err(FacultyError::config("store table cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(FacultyError::config("timeout must be greater than 0"));
        }

        Ok(())
    }

    /// REST endpoint for the configured table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.config.table = table.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
