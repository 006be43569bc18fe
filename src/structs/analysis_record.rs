use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the `analyses` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRecord {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    pub user_id: String,
    pub code_snippet: String,
    pub language: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub optimized_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub issues_count: i64,
    pub created_at: DateTime<Utc>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Stores with integer keys return numeric ids; both forms are kept as text.
fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected a string or integer id, got {}", other))),
    }
}
