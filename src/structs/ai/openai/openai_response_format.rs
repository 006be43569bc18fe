use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenAIResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl OpenAIResponseFormat {
    pub fn json_object() -> Self {
        Self { format_type: "json_object".to_string() }
    }
}
