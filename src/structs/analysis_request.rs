use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::{ReviewError, ReviewResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(code: &str, language: &str) -> Self {
        Self {
            code: code.to_string(),
            language: language.to_string(),
            file_name: None,
        }
    }

    /// Validates an untyped request body field by field so the error names the culprit.
    pub fn from_json(body: &Value) -> ReviewResult<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| ReviewError::validation_error("body", "Request body must be a JSON object"))?;

        let code = required_string(object.get("code"), "code")?;
        let language = required_string(object.get("language"), "language")?;
        let file_name = match object.get("file_name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(ReviewError::validation_error("file_name", "file_name must be a string or null")),
        };

        Ok(Self { code, language, file_name })
    }

    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }
}

fn required_string(value: Option<&Value>, field: &str) -> ReviewResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(ReviewError::validation_error(field, &format!("Field required: {}", field))),
        Some(_) => Err(ReviewError::validation_error(field, &format!("{} must be a string", field))),
    }
}
