use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;

use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, GROQ_API_KEY_ENV, HOST_ENV, PORT_ENV, SUPABASE_KEY_ENV,
    SUPABASE_URL_ENV,
};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads the TOML file (explicit path, else the default location if present),
    /// then layers environment variables on top.
    pub fn load(path: Option<&Path>) -> ReviewResult<Config> {
        let mut config = match path {
            Some(explicit) => Self::read_file(explicit)?,
            None => match Self::default_config_path() {
                Some(default) if default.exists() => Self::read_file(&default)?,
                _ => Config::default(),
            },
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn read_file(path: &Path) -> ReviewResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            ReviewError::config_error(&path.display().to_string(), &format!("Cannot read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ReviewError::config_error(&path.display().to_string(), &format!("Invalid TOML: {}", e.message()))
        })
    }

    /// Empty variables count as unset.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ReviewResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup(GROQ_API_KEY_ENV) {
            config.ai.api_key = Some(key);
        }
        if let Some(url) = lookup(SUPABASE_URL_ENV) {
            config.store.url = Some(url);
        }
        if let Some(key) = lookup(SUPABASE_KEY_ENV) {
            config.store.key = Some(key);
        }
        if let Some(host) = lookup(HOST_ENV) {
            config.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| ReviewError::config_error(PORT_ENV, &format!("'{}' is not a valid port", port)))?;
        }

        Ok(())
    }

    /// Collects every problem instead of stopping at the first.
    /// Store credentials are only required when the hosted store is in use.
    pub fn validate_config(config: &Config, require_store: bool) -> Result<(), Vec<ReviewError>> {
        let mut errors = Vec::new();

        if config.ai.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
            errors.push(ReviewError::config_error(
                GROQ_API_KEY_ENV,
                "Set GROQ_API_KEY in the environment or ai.api_key in the config file",
            ));
        }

        if !is_http_url(&config.ai.base_url) {
            errors.push(ReviewError::config_error("ai.base_url", "Must be an http(s) URL"));
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(ReviewError::config_error("ai.temperature", "Must be between 0.0 and 2.0"));
        }

        if config.ai.timeout_secs == 0 {
            errors.push(ReviewError::config_error("ai.timeout_secs", "Must be greater than zero"));
        }

        if require_store {
            match config.store.url.as_deref() {
                None => errors.push(ReviewError::config_error(
                    SUPABASE_URL_ENV,
                    "Set SUPABASE_URL in the environment or store.url in the config file",
                )),
                Some(url) if !is_http_url(url) => {
                    errors.push(ReviewError::config_error(SUPABASE_URL_ENV, "Must be an http(s) URL"));
                }
                Some(_) => {}
            }

            if config.store.key.as_deref().map_or(true, |key| key.trim().is_empty()) {
                errors.push(ReviewError::config_error(
                    SUPABASE_KEY_ENV,
                    "Set SUPABASE_KEY in the environment or store.key in the config file",
                ));
            }

            if config.store.timeout_secs == 0 {
                errors.push(ReviewError::config_error("store.timeout_secs", "Must be greater than zero"));
            }
        }

        for origin in &config.server.allowed_origins {
            if !is_origin(origin) {
                errors.push(ReviewError::config_error(
                    "server.allowed_origins",
                    &format!("'{}' is not an origin like http://localhost:3000", origin),
                ));
            }
        }

        if config.server.default_user_id.trim().is_empty() {
            errors.push(ReviewError::config_error("server.default_user_id", "Must not be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

fn is_origin(value: &str) -> bool {
    Url::parse(value)
        .map(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.host().is_some()
                && url.path() == "/"
                && !value.ends_with('/')
                && url.query().is_none()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    fn complete_config() -> Config {
        let mut config = Config::default();
        ConfigManager::apply_env_overrides(
            &mut config,
            env(&[
                ("GROQ_API_KEY", "gsk_test"),
                ("SUPABASE_URL", "https://abc.supabase.co"),
                ("SUPABASE_KEY", "service-key"),
            ]),
        )
        .unwrap();
        config
    }

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.default_user_id, "demo-user");
        assert_eq!(config.ai.model, "llama-3.3-70b-versatile");
        assert_eq!(config.store.analyses_table, "analyses");
        assert_eq!(config.ai.max_retries, 1);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        ConfigManager::apply_env_overrides(&mut config, env(&[("REVIEW_RELAY_PORT", "9100"), ("GROQ_API_KEY", "")])).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.ai.api_key, None);
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut config = Config::default();
        assert!(ConfigManager::apply_env_overrides(&mut config, env(&[("REVIEW_RELAY_PORT", "http")])).is_err());
    }

    #[test]
    fn missing_credentials_fail_validation() {
        let errors = ConfigManager::validate_config(&Config::default(), true).unwrap_err();
        let fields: Vec<String> = errors
            .iter()
            .filter_map(|e| match e {
                ReviewError::Configuration { field, .. } => Some(field.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["GROQ_API_KEY", "SUPABASE_URL", "SUPABASE_KEY"]);
    }

    #[test]
    fn store_credentials_optional_without_store() {
        let mut config = Config::default();
        config.ai.api_key = Some("gsk_test".to_string());
        assert!(ConfigManager::validate_config(&config, false).is_ok());
        assert!(ConfigManager::validate_config(&config, true).is_err());
    }

    #[test]
    fn complete_config_validates() {
        assert!(ConfigManager::validate_config(&complete_config(), true).is_ok());
    }

    #[test]
    fn rejects_bad_origins() {
        let mut config = complete_config();
        config.server.allowed_origins = vec!["localhost:3000".to_string(), "http://localhost:3000/app".to_string()];
        let errors = ConfigManager::validate_config(&config, true).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\nallowed_origins = [\"https://review.example.com\"]\n\n[ai]\nmodel = \"llama-3.1-8b-instant\"\ntemperature = 0.0\n\n[store]\nurl = \"https://abc.supabase.co\""
        )
        .unwrap();

        let config = ConfigManager::read_file(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.allowed_origins, vec!["https://review.example.com"]);
        assert_eq!(config.ai.model, "llama-3.1-8b-instant");
        assert_eq!(config.store.url.as_deref(), Some("https://abc.supabase.co"));
        assert_eq!(config.store.timeout_secs, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/review-relay.toml");
        assert!(matches!(ConfigManager::load(Some(missing)), Err(ReviewError::Configuration { .. })));
    }
}
