pub mod ai_providers;
pub mod analysis_parser;
pub mod code_analyzer;
pub mod http_client;
pub mod stores;
