pub mod ai_provider_error;
pub mod commands;
pub mod issue_type;
pub mod severity;
pub mod store_error;
