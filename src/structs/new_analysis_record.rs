use serde::Serialize;
use crate::structs::analysis_data::AnalysisData;
use crate::structs::analysis_request::AnalysisRequest;

/// Insert payload for the `analyses` table; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct NewAnalysisRecord {
    pub user_id: String,
    pub code_snippet: String,
    pub language: String,
    pub file_name: Option<String>,
    pub summary: Option<String>,
    pub optimized_code: Option<String>,
    pub issues_count: usize,
}

impl NewAnalysisRecord {
    pub fn from_analysis(user_id: &str, request: &AnalysisRequest, analysis: &AnalysisData) -> Self {
        Self {
            user_id: user_id.to_string(),
            code_snippet: request.code.clone(),
            language: request.language.clone(),
            file_name: request.file_name.clone(),
            summary: Some(analysis.summary.clone()),
            optimized_code: Some(analysis.optimized_code.clone()),
            issues_count: analysis.issues.len(),
        }
    }
}
