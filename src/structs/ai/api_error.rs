use serde::Deserialize;

/// Error body returned by OpenAI-compatible endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    pub message: String,
}

impl ApiErrorBody {
    /// Best-effort extraction of a readable message from a raw error body.
    pub fn message_from(raw: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(raw) {
            Ok(body) => match body.error.error_type {
                Some(kind) => format!("{}: {}", kind, body.error.message),
                None => body.error.message,
            },
            Err(_) => raw.to_string(),
        }
    }
}
