use serde::Serialize;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::structs::issue::Issue;

/// Insert payload for the `analysis_results` table.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssueRecord {
    pub analysis_id: String,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub line_number: Option<i64>,
    pub suggestion: Option<String>,
}

impl NewIssueRecord {
    pub fn from_issue(analysis_id: &str, issue: &Issue) -> Self {
        Self {
            analysis_id: analysis_id.to_string(),
            issue_type: issue.issue_type,
            severity: issue.severity,
            title: issue.title.clone(),
            description: issue.description.clone(),
            line_number: issue.line_number,
            suggestion: issue.suggestion.clone(),
        }
    }
}
