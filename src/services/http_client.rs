use once_cell::sync::OnceCell;
use reqwest::Client;
use crate::config::constants::{timeout_duration_secs, HTTP_CONNECT_TIMEOUT_SECS};
use crate::errors::{ReviewError, ReviewResult};

static SHARED_CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide connection pool shared by the model provider and the store client.
/// Request timeouts are set per call by each client.
pub fn shared_client() -> ReviewResult<Client> {
    SHARED_CLIENT
        .get_or_try_init(|| {
            Client::builder()
                .connect_timeout(timeout_duration_secs(HTTP_CONNECT_TIMEOUT_SECS))
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
        })
        .cloned()
        .map_err(|e| ReviewError::system_error("HTTP client initialization", &e.to_string()))
}
