use crate::config::constants::{
    ANALYSES_TABLE, ANALYSIS_RESULTS_TABLE, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL,
    DEFAULT_AI_RETRY_BACKOFF_MS, DEFAULT_AI_TEMPERATURE, DEFAULT_AI_TIMEOUT_SECS,
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_MAX_RETRIES, DEFAULT_SERVER_PORT,
    DEFAULT_STORE_RETRY_BACKOFF_MS, DEFAULT_STORE_TIMEOUT_SECS, DEFAULT_USER_ID,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_allowed_origins() -> Vec<String> {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|o| (*o).to_string()).collect()
    }

    pub fn default_user_id() -> String {
        DEFAULT_USER_ID.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_AI_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_AI_MODEL.to_string()
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_AI_TEMPERATURE
    }

    pub fn default_ai_timeout_secs() -> u64 {
        DEFAULT_AI_TIMEOUT_SECS
    }

    pub fn default_ai_retry_backoff_ms() -> u64 {
        DEFAULT_AI_RETRY_BACKOFF_MS
    }

    pub fn default_store_timeout_secs() -> u64 {
        DEFAULT_STORE_TIMEOUT_SECS
    }

    pub fn default_store_retry_backoff_ms() -> u64 {
        DEFAULT_STORE_RETRY_BACKOFF_MS
    }

    pub fn default_max_retries() -> u32 {
        DEFAULT_MAX_RETRIES
    }

    pub fn default_analyses_table() -> String {
        ANALYSES_TABLE.to_string()
    }

    pub fn default_results_table() -> String {
        ANALYSIS_RESULTS_TABLE.to_string()
    }
}
