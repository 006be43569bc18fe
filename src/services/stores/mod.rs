pub mod memory_store;
pub mod supabase_store;
