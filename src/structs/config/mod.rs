pub mod ai_config;
pub mod config;
pub mod server_config;
pub mod store_config;
