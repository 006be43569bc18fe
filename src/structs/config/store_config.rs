use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, skip_serializing)]
    pub key: Option<String>,

    #[serde(default = "ConfigHelper::default_store_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "ConfigHelper::default_store_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    #[serde(default = "ConfigHelper::default_analyses_table")]
    pub analyses_table: String,

    #[serde(default = "ConfigHelper::default_results_table")]
    pub results_table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            timeout_secs: ConfigHelper::default_store_timeout_secs(),
            max_retries: ConfigHelper::default_max_retries(),
            retry_backoff_ms: ConfigHelper::default_store_retry_backoff_ms(),
            analyses_table: ConfigHelper::default_analyses_table(),
            results_table: ConfigHelper::default_results_table(),
        }
    }
}
