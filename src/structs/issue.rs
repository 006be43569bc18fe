use serde::{Deserialize, Serialize};
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub issue_type: IssueType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub line_number: Option<i64>,
    #[serde(default)]
    pub suggestion: Option<String>,
}
