use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Model API error (HTTP {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Model request timed out after {0}s")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Model returned no completion content")]
    EmptyCompletion,
}

impl AiProviderError {
    /// Transient failures worth one more attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::Timeout(_) => true,
            Self::ApiError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
