use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use crate::enums::store_error::StoreError;
use crate::structs::select_query::SelectQuery;
use crate::traits::row_store::RowStore;

/// In-process row store. Fills `id` and `created_at` the way the hosted tables default them.
#[derive(Default)]
pub struct MemoryStore {
    tables: DashMap<String, Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |rows| rows.len())
    }
}

fn filter_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RowStore for MemoryStore {
    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        let mut stored = Vec::with_capacity(rows.len());

        for row in rows {
            let Value::Object(mut fields) = row else {
                return Err(StoreError::UnexpectedPayload(format!("rows for '{}' must be JSON objects", table)));
            };

            fields
                .entry("id")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
            fields
                .entry("created_at")
                .or_insert_with(|| Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)));

            stored.push(Value::Object(fields));
        }

        self.tables
            .entry(table.to_string())
            .or_default()
            .extend(stored.iter().cloned());

        Ok(stored)
    }

    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        let mut rows: Vec<(usize, Value)> = self
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .enumerate()
                    .filter(|(_, row)| {
                        query.filters.iter().all(|(column, expected)| {
                            row.get(column).is_some_and(|actual| filter_text(actual) == *expected)
                        })
                    })
                    .map(|(position, row)| (position, row.clone()))
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order_by {
            // Insertion order breaks ties between equal sort keys.
            rows.sort_by(|(pa, a), (pb, b)| {
                compare_values(a.get(&order.column), b.get(&order.column)).then(pa.cmp(pb))
            });
            if order.descending {
                rows.reverse();
            }
        }

        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_fills_generated_columns() {
        let store = MemoryStore::new();
        let rows = store.insert("analyses", vec![json!({"user_id": "u1"})]).await.unwrap();

        assert!(rows[0]["id"].as_str().is_some());
        assert!(rows[0]["created_at"].as_str().is_some());
        assert_eq!(store.row_count("analyses"), 1);
    }

    #[tokio::test]
    async fn select_filters_and_orders() {
        let store = MemoryStore::new();
        store
            .insert(
                "analyses",
                vec![
                    json!({"user_id": "u1", "created_at": "2025-01-01T00:00:00Z", "n": 1}),
                    json!({"user_id": "u2", "created_at": "2025-01-02T00:00:00Z", "n": 2}),
                    json!({"user_id": "u1", "created_at": "2025-01-03T00:00:00Z", "n": 3}),
                ],
            )
            .await
            .unwrap();

        let query = SelectQuery::new().eq("user_id", "u1").order_desc("created_at");
        let rows = store.select("analyses", &query).await.unwrap();
        let order: Vec<i64> = rows.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[tokio::test]
    async fn unknown_table_is_empty() {
        let store = MemoryStore::new();
        assert!(store.select("missing", &SelectQuery::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_non_object_rows() {
        let store = MemoryStore::new();
        assert!(store.insert("analyses", vec![json!([1, 2])]).await.is_err());
    }
}
