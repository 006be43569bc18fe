use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Caller identity used when a request carries no `X-User-ID` header.
    #[serde(default = "ConfigHelper::default_user_id")]
    pub default_user_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            allowed_origins: ConfigHelper::default_allowed_origins(),
            default_user_id: ConfigHelper::default_user_id(),
        }
    }
}
