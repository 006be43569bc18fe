use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Store request failed (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Store network error: {0}")]
    Network(String),

    #[error("Store request timed out after {0}s")]
    Timeout(u64),

    #[error("Unexpected store payload: {0}")]
    UnexpectedPayload(String),
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::UnexpectedPayload(_) => false,
        }
    }
}
