use serde::{Deserialize, Serialize};
use crate::structs::issue::Issue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisData {
    pub issues: Vec<Issue>,
    pub optimized_code: String,
    pub summary: String,
    pub issues_count: usize,
}

impl AnalysisData {
    /// `issues_count` always mirrors `issues`, whatever the model claimed.
    pub fn new(issues: Vec<Issue>, optimized_code: String, summary: String) -> Self {
        let issues_count = issues.len();
        Self {
            issues,
            optimized_code,
            summary,
            issues_count,
        }
    }
}
