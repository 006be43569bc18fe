use async_trait::async_trait;
use serde_json::Value;
use crate::enums::store_error::StoreError;
use crate::structs::select_query::SelectQuery;

/// Minimal row-oriented view of the hosted database.
#[async_trait]
pub trait RowStore: Send + Sync {

    /// Inserts `rows` into `table` and returns the rows as stored, with generated columns filled in.
    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, StoreError>;

    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError>;
}
