//! PostgREST-compatible faculty store client
//!
//! Speaks the subset of the PostgREST protocol the loader needs:
//! a filtered `DELETE` to wipe the table and a `POST` per row.

use super::FacultyStore;
use crate::config::StoreConfig;
use async_trait::async_trait;
use faculty_common::{FacultyError, FacultyRecord, Result};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

/// PostgREST refuses an unfiltered DELETE, so match every row by id instead.
const MATCH_ALL_ROWS: (&str, &str) = ("id", "neq.00000000-0000-0000-0000-000000000000");

/// Longest response body kept in a store error.
const MAX_ERROR_BODY: usize = 200;

/// HTTP client for a hosted faculty table
pub struct RestStore {
    client: Client,
    table_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(network)?;

        Ok(Self {
            client,
            table_url: config.table_url(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message: String = body.chars().take(MAX_ERROR_BODY).collect();
        Err(FacultyError::store(status.as_u16(), message))
    }
}

#[async_trait]
impl FacultyStore for RestStore {
    async fn clear_all(&self) -> Result<()> {
        debug!(url = %self.table_url, "Clearing faculty table");

        let response = self
            .authorized(self.client.delete(&self.table_url))
            .query(&[MATCH_ALL_ROWS])
            .send()
            .await
            .map_err(network)?;

        Self::check(response).await
    }

    async fn insert(&self, record: &FacultyRecord) -> Result<()> {
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(network)?;

        Self::check(response).await
    }
}

fn network(err: reqwest::Error) -> FacultyError {
    FacultyError::network(err.to_string())
}
