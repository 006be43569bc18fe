use thiserror::Error;
use crate::config::constants::EMPTY_CODE_MESSAGE;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Validation error for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Code cannot be empty")]
    EmptyInput,

    /// The model's reply was not JSON at all.
    #[error("AI returned invalid JSON format: {reason}")]
    MalformedModelOutput { reason: String },

    /// The reply parsed but does not fit the analysis shape.
    #[error("AI returned an invalid analysis at '{field}': {reason}")]
    InvalidModelOutput { field: String, reason: String },

    #[error("Model provider failed: {0}")]
    Provider(#[from] AiProviderError),

    #[error("Failed to write to '{table}': {reason}")]
    StoreWrite { table: String, reason: String },

    #[error("Failed to read from '{table}': {reason}")]
    StoreRead { table: String, reason: String },

    #[error("Configuration error for '{field}': {suggestion}")]
    Configuration { field: String, suggestion: String },

    #[error("System error during {operation}: {reason}")]
    System { operation: String, reason: String },
}

impl ReviewError {
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_output(reason: &str) -> Self {
        Self::MalformedModelOutput { reason: reason.to_string() }
    }

    pub fn invalid_output(field: &str, reason: &str) -> Self {
        Self::InvalidModelOutput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn store_write(table: &str, error: impl ToString) -> Self {
        Self::StoreWrite {
            table: table.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn store_read(table: &str, error: impl ToString) -> Self {
        Self::StoreRead {
            table: table.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn config_error(field: &str, suggestion: &str) -> Self {
        Self::Configuration {
            field: field.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::System {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } | Self::EmptyInput => 400,
            _ => 500,
        }
    }

    /// Text placed in the `detail` field of an error response.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => EMPTY_CODE_MESSAGE.to_string(),
            Self::MalformedModelOutput { .. } => "AI returned invalid JSON format.".to_string(),
            Self::Validation { reason, .. } => reason.clone(),
            other => format!("Analysis failed: {}", other),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type ReviewResult<T> = Result<T, ReviewError>;
