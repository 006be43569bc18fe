use serde::{Deserialize, Serialize};
use crate::structs::analysis_data::AnalysisData;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub analysis: AnalysisData,
    pub code_snippet: String,
}
