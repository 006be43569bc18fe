use std::sync::Arc;
use std::time::Instant;

use crate::adapters::analysis_adapter::AnalysisAdapter;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{ReviewError, ReviewResult};
use crate::helpers::prompt_generator;
use crate::prompts::review_system_prompt::REVIEW_SYSTEM_PROMPT;
use crate::services::analysis_parser::AnalysisParser;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::api_response::ApiResponse;
use crate::traits::ai_provider::AiProvider;

pub struct CodeAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
    analysis_adapter: Arc<AnalysisAdapter>,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, analysis_adapter: Arc<AnalysisAdapter>) -> Self {
        Self {
            ai_provider,
            analysis_adapter,
        }
    }

    /// Reviews one snippet. Saving the result is best-effort: a store failure is
    /// logged and the caller still gets the analysis.
    pub async fn analyze(&self, request: &AnalysisRequest, user_id: &str) -> ReviewResult<ApiResponse> {
        if !request.has_code() {
            return Err(ReviewError::EmptyInput);
        }

        let started = Instant::now();
        log::info!("🔍 Analyzing {} snippet for user: {}", request.language, user_id);

        let user_prompt = prompt_generator::generate_prompt(request);
        let response_text = self
            .ai_provider
            .chat(REVIEW_SYSTEM_PROMPT.to_string(), vec![user_prompt])
            .await
            .map_err(|e| {
                log::error!("❌ Model request failed: {}", e);
                match e {
                    // An empty reply is unparseable output, not a transport failure.
                    AiProviderError::EmptyCompletion => ReviewError::malformed_output(&e.to_string()),
                    other => ReviewError::Provider(other),
                }
            })?;

        let analysis = AnalysisParser::new(&response_text, &request.code)
            .parse()
            .map_err(|e| {
                log::error!("❌ Could not use model reply: {}", e);
                e
            })?;

        match self.analysis_adapter.save_analysis(user_id, request, &analysis).await {
            Ok(analysis_id) => log::info!("✅ Analysis {} saved for user: {}", analysis_id, user_id),
            Err(e) => log::warn!("⚠️ Failed to save analysis for user {}: {}", user_id, e),
        }

        log::info!(
            "✅ Analysis complete: {} issues in {:.2}s",
            analysis.issues_count,
            started.elapsed().as_secs_f64()
        );

        Ok(ApiResponse {
            analysis,
            code_snippet: request.code.clone(),
        })
    }
}
