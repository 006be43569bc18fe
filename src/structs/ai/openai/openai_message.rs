use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

impl OpenAIMessage {
    pub fn system(content: String) -> Self {
        Self { role: "system".to_string(), content }
    }

    pub fn user(content: String) -> Self {
        Self { role: "user".to_string(), content }
    }
}
