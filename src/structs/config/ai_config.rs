use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// Normally supplied through `GROQ_API_KEY` rather than the config file.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_ai_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "ConfigHelper::default_ai_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            model: ConfigHelper::default_model(),
            temperature: ConfigHelper::default_temperature(),
            max_tokens: None,
            api_key: None,
            timeout_secs: ConfigHelper::default_ai_timeout_secs(),
            max_retries: ConfigHelper::default_max_retries(),
            retry_backoff_ms: ConfigHelper::default_ai_retry_backoff_ms(),
        }
    }
}
