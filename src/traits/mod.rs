pub mod ai_provider;
pub mod row_store;
