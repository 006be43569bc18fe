use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::{sleep_duration_millis, timeout_duration_secs};
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{ReviewError, ReviewResult};
use crate::helpers::retry::retry_with_backoff;
use crate::structs::ai::api_error::ApiErrorBody;
use crate::structs::ai::openai::openai_chat_response::OpenAIChatResponse;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response_format::OpenAIResponseFormat;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Chat completions against Groq's OpenAI-compatible endpoint, always in JSON mode.
#[derive(Clone)]
pub struct GroqProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout_secs: u64,
    max_retries: u32,
    retry_backoff_ms: u64,
}

impl GroqProvider {
    pub fn new(api_key: String, client: Client) -> Self {
        Self::with_config(api_key, client, &AiConfig::default())
    }

    pub fn from_config(config: &AiConfig, client: Client) -> ReviewResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ReviewError::config_error("GROQ_API_KEY", "Set GROQ_API_KEY before starting the server"))?;

        Ok(Self::with_config(api_key, client, config))
    }

    fn with_config(api_key: String, client: Client, config: &AiConfig) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_retry_policy(mut self, max_retries: u32, retry_backoff_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_ms = retry_backoff_ms;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::with_capacity(user_prompts.len() + 1);

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage::system(system_prompt));
        }

        messages.extend(user_prompts.into_iter().map(OpenAIMessage::user));
        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(system_prompt, user_prompts),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            response_format: Some(OpenAIResponseFormat::json_object()),
            stream: false,
        }
    }

    async fn make_request(&self, url: &str, request_body: &OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .timeout(timeout_duration_secs(self.timeout_secs))
            .json(request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))
    }

    async fn get_non_streaming_response(&self, url: &str, request_body: &OpenAIRequest) -> Result<String, AiProviderError> {
        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = ApiErrorBody::message_from(&error_text);

            log::error!("❌ Model API error response ({}): {}", status, message);

            return Err(match status.as_u16() {
                401 | 403 => AiProviderError::AuthenticationError(message),
                code => AiProviderError::ApiError { status: code, body: message },
            });
        }

        let body: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiProviderError::Timeout(self.timeout_secs)
                } else {
                    AiProviderError::SerializationError(e.to_string())
                }
            })?;

        match body.first_content() {
            Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
            _ => Err(AiProviderError::EmptyCompletion),
        }
    }

    fn transport_error(&self, error: &reqwest::Error) -> AiProviderError {
        if error.is_timeout() {
            AiProviderError::Timeout(self.timeout_secs)
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }
}

#[async_trait]
impl AiProvider for GroqProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);
        let url = url.as_str();
        let request_body = &request_body;

        retry_with_backoff(
            "Model request",
            self.max_retries,
            sleep_duration_millis(self.retry_backoff_ms),
            AiProviderError::is_retryable,
            move || self.get_non_streaming_response(url, request_body),
        )
        .await
    }
}
