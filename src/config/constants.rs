use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_USER_ID: &str = "demo-user";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

pub const SERVICE_NAME: &str = "Code Analysis Agent";
pub const SERVICE_STATUS: &str = "Backend is running";

pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_KEY";
pub const HOST_ENV: &str = "REVIEW_RELAY_HOST";
pub const PORT_ENV: &str = "REVIEW_RELAY_PORT";

pub const DEFAULT_AI_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_AI_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AI_RETRY_BACKOFF_MS: u64 = 500;

pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORE_RETRY_BACKOFF_MS: u64 = 250;
pub const DEFAULT_MAX_RETRIES: u32 = 1;
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

pub const ANALYSES_TABLE: &str = "analyses";
pub const ANALYSIS_RESULTS_TABLE: &str = "analysis_results";

pub const DEFAULT_SUMMARY: &str = "Analysis complete.";
pub const EMPTY_CODE_MESSAGE: &str = "Code cannot be empty";

pub const CONFIG_DIR_NAME: &str = "review-relay";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SCHEMA_SQL: &str = include_str!("../../migrations/001_create_analyses.sql");

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
