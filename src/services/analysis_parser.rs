use serde_json::{Map, Value};

use crate::config::constants::DEFAULT_SUMMARY;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::analysis_data::AnalysisData;
use crate::structs::issue::Issue;

const ISSUES_FIELD: &str = "issues";
const OPTIMIZED_CODE_FIELD: &str = "optimized_code";
const SUMMARY_FIELD: &str = "summary";
const ISSUE_TYPE_FIELD: &str = "issue_type";
const SEVERITY_FIELD: &str = "severity";
const TITLE_FIELD: &str = "title";
const DESCRIPTION_FIELD: &str = "description";
const LINE_NUMBER_FIELD: &str = "line_number";
const SUGGESTION_FIELD: &str = "suggestion";
const CODE_FENCE: &str = "```";

/// Turns the model's raw reply into an [`AnalysisData`], trusting none of its fields.
pub struct AnalysisParser<'a> {
    raw: &'a str,
    original_code: &'a str,
}

impl<'a> AnalysisParser<'a> {
    pub fn new(raw: &'a str, original_code: &'a str) -> Self {
        Self { raw, original_code }
    }

    pub fn parse(&self) -> ReviewResult<AnalysisData> {
        let body = strip_code_fence(self.raw);
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ReviewError::malformed_output(&e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(ReviewError::invalid_output("$", "expected a JSON object"));
        };

        let issues = self.parse_issues(&object)?;
        let optimized_code = optional_text(&object, OPTIMIZED_CODE_FIELD)
            .unwrap_or_else(|| self.original_code.to_string());
        let summary = optional_text(&object, SUMMARY_FIELD)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

        Ok(AnalysisData::new(issues, optimized_code, summary))
    }

    fn parse_issues(&self, object: &Map<String, Value>) -> ReviewResult<Vec<Issue>> {
        match object.get(ISSUES_FIELD) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| parse_issue(index, item))
                .collect(),
            Some(_) => Err(ReviewError::invalid_output(ISSUES_FIELD, "expected an array")),
        }
    }
}

fn parse_issue(index: usize, value: &Value) -> ReviewResult<Issue> {
    let path = |field: &str| format!("{}[{}].{}", ISSUES_FIELD, index, field);

    let Value::Object(fields) = value else {
        return Err(ReviewError::invalid_output(&format!("{}[{}]", ISSUES_FIELD, index), "expected an object"));
    };

    let issue_type = required_text(fields, ISSUE_TYPE_FIELD, &path)?
        .parse::<IssueType>()
        .map_err(|reason| ReviewError::invalid_output(&path(ISSUE_TYPE_FIELD), &reason))?;
    let severity = required_text(fields, SEVERITY_FIELD, &path)?
        .parse::<Severity>()
        .map_err(|reason| ReviewError::invalid_output(&path(SEVERITY_FIELD), &reason))?;

    let line_number = match fields.get(LINE_NUMBER_FIELD) {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            line_number_from(value)
                .ok_or_else(|| ReviewError::invalid_output(&path(LINE_NUMBER_FIELD), "expected an integer or null"))?,
        ),
    };

    let suggestion = match fields.get(SUGGESTION_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => return Err(ReviewError::invalid_output(&path(SUGGESTION_FIELD), "expected a string or null")),
    };

    Ok(Issue {
        issue_type,
        severity,
        title: required_text(fields, TITLE_FIELD, &path)?.to_string(),
        description: required_text(fields, DESCRIPTION_FIELD, &path)?.to_string(),
        line_number,
        suggestion,
    })
}

fn required_text<'v>(
    fields: &'v Map<String, Value>,
    field: &str,
    path: &dyn Fn(&str) -> String,
) -> ReviewResult<&'v str> {
    match fields.get(field) {
        Some(Value::String(text)) => Ok(text),
        None | Some(Value::Null) => Err(ReviewError::invalid_output(&path(field), "field is required")),
        Some(_) => Err(ReviewError::invalid_output(&path(field), "expected a string")),
    }
}

fn optional_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    object.get(field).and_then(Value::as_str).map(str::to_string)
}

fn line_number_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Models sometimes wrap JSON in a markdown fence despite being told not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix(CODE_FENCE)
        .and_then(|rest| rest.strip_suffix(CODE_FENCE))
    else {
        return trimmed;
    };

    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}
