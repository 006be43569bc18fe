use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::constants::{sleep_duration_millis, timeout_duration_secs};
use crate::enums::store_error::StoreError;
use crate::errors::{ReviewError, ReviewResult};
use crate::helpers::retry::retry_with_backoff;
use crate::structs::config::store_config::StoreConfig;
use crate::structs::select_query::SelectQuery;
use crate::traits::row_store::RowStore;

/// Row access through Supabase's PostgREST interface.
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    client: Client,
    timeout_secs: u64,
    max_retries: u32,
    retry_backoff_ms: u64,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: String, client: Client) -> Self {
        let defaults = StoreConfig::default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout_secs: defaults.timeout_secs,
            max_retries: defaults.max_retries,
            retry_backoff_ms: defaults.retry_backoff_ms,
        }
    }

    pub fn from_config(config: &StoreConfig, client: Client) -> ReviewResult<Self> {
        let url = config
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ReviewError::config_error("SUPABASE_URL", "Set SUPABASE_URL to the project URL"))?;
        let key = config
            .key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ReviewError::config_error("SUPABASE_KEY", "Set SUPABASE_KEY to the project API key"))?;

        Ok(Self::new(url, key, client).with_retry_policy(config.max_retries, config.retry_backoff_ms).with_timeout_secs(config.timeout_secs))
    }

    pub fn with_retry_policy(mut self, max_retries: u32, retry_backoff_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_ms = retry_backoff_ms;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .timeout(timeout_duration_secs(self.timeout_secs))
    }

    fn transport_error(&self, error: &reqwest::Error) -> StoreError {
        if error.is_timeout() {
            StoreError::Timeout(self.timeout_secs)
        } else {
            StoreError::Network(error.to_string())
        }
    }

    async fn read_rows(&self, response: Response) -> Result<Vec<Value>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status { status: status.as_u16(), body });
        }

        let text = response.text().await.map_err(|e| self.transport_error(&e))?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(rows)) => Ok(rows),
            Ok(other) => Err(StoreError::UnexpectedPayload(format!("expected an array of rows, got {}", other))),
            Err(e) => Err(StoreError::UnexpectedPayload(e.to_string())),
        }
    }

    async fn select_once(&self, url: &str, params: &[(String, String)]) -> Result<Vec<Value>, StoreError> {
        let response = self
            .authorize(self.client.get(url))
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.read_rows(response).await
    }
}

#[async_trait]
impl RowStore for SupabaseStore {
    /// Not retried: a repeated insert could duplicate the row.
    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        let response = self
            .authorize(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&rows)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.read_rows(response).await
    }

    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        let url = self.table_url(table);
        let params = query.to_postgrest_params();
        let url = url.as_str();
        let params = params.as_slice();

        retry_with_backoff(
            "Store select",
            self.max_retries,
            sleep_duration_millis(self.retry_backoff_ms),
            StoreError::is_retryable,
            move || self.select_once(url, params),
        )
        .await
    }
}
