use std::sync::Arc;
use serde_json::Value;

use crate::config::constants::{ANALYSES_TABLE, ANALYSIS_RESULTS_TABLE};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::analysis_data::AnalysisData;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::store_config::StoreConfig;
use crate::structs::new_analysis_record::NewAnalysisRecord;
use crate::structs::new_issue_record::NewIssueRecord;
use crate::structs::select_query::SelectQuery;
use crate::traits::row_store::RowStore;

const USER_ID_COLUMN: &str = "user_id";
const CREATED_AT_COLUMN: &str = "created_at";
const ID_COLUMN: &str = "id";

/// Maps analyses onto the `analyses` / `analysis_results` tables.
///
/// The two inserts in [`AnalysisAdapter::save_analysis`] are not atomic: if the
/// issue insert fails the parent record stays behind without its issues.
pub struct AnalysisAdapter {
    store: Arc<dyn RowStore>,
    analyses_table: String,
    results_table: String,
}

impl AnalysisAdapter {

    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            store,
            analyses_table: ANALYSES_TABLE.to_string(),
            results_table: ANALYSIS_RESULTS_TABLE.to_string(),
        }
    }

    pub fn from_config(store: Arc<dyn RowStore>, config: &StoreConfig) -> Self {
        Self {
            store,
            analyses_table: config.analyses_table.clone(),
            results_table: config.results_table.clone(),
        }
    }

    /// Inserts the record, then its issues. Returns the store-generated record id.
    pub async fn save_analysis(&self, user_id: &str, request: &AnalysisRequest, analysis: &AnalysisData) -> ReviewResult<String> {
        let record = NewAnalysisRecord::from_analysis(user_id, request, analysis);
        let row = serde_json::to_value(&record)
            .map_err(|e| ReviewError::store_write(&self.analyses_table, e))?;

        let inserted = self
            .store
            .insert(&self.analyses_table, vec![row])
            .await
            .map_err(|e| ReviewError::store_write(&self.analyses_table, e))?;

        let analysis_id = inserted
            .first()
            .and_then(|row| row.get(ID_COLUMN))
            .and_then(id_text)
            .ok_or_else(|| ReviewError::store_write(
                &self.analyses_table,
                "insert returned no row; check that the table exists and its policies allow inserts",
            ))?;

        if !analysis.issues.is_empty() {
            self.save_issues(&analysis_id, analysis).await;
        }

        Ok(analysis_id)
    }

    async fn save_issues(&self, analysis_id: &str, analysis: &AnalysisData) {
        let rows: Result<Vec<Value>, _> = analysis
            .issues
            .iter()
            .map(|issue| serde_json::to_value(NewIssueRecord::from_issue(analysis_id, issue)))
            .collect();

        let result = match rows {
            Ok(rows) => self
                .store
                .insert(&self.results_table, rows)
                .await
                .map_err(|e| ReviewError::store_write(&self.results_table, e)),
            Err(e) => Err(ReviewError::store_write(&self.results_table, e)),
        };

        match result {
            Ok(_) => log::debug!("💾 Stored {} issues for analysis {}", analysis.issues.len(), analysis_id),
            Err(e) => log::warn!("⚠️ Analysis {} saved without its issues: {}", analysis_id, e),
        }
    }

    /// Most recent first. A failed read yields an empty history rather than an error.
    pub async fn get_history(&self, user_id: &str) -> ReviewResult<Vec<AnalysisRecord>> {
        let query = SelectQuery::new()
            .eq(USER_ID_COLUMN, user_id)
            .order_desc(CREATED_AT_COLUMN);

        let rows = match self.store.select(&self.analyses_table, &query).await {
            Ok(rows) => rows,
            Err(e) => {
                let error = ReviewError::store_read(&self.analyses_table, e);
                log::warn!("⚠️ Error fetching history for {}: {}", user_id, error);
                return Ok(Vec::new());
            }
        };

        let records = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<AnalysisRecord>(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("⚠️ Skipping malformed history row for {}: {}", user_id, e);
                    None
                }
            })
            .collect();

        Ok(records)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
