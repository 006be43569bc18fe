use std::sync::Arc;

use crate::adapters::analysis_adapter::AnalysisAdapter;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;
use crate::traits::row_store::RowStore;

/// Built once at startup and shared by every request.
pub struct AppState {
    pub analyzer: CodeAnalyzer,
    pub analysis_adapter: Arc<AnalysisAdapter>,
    pub default_user_id: String,
}

impl AppState {
    pub fn new(ai_provider: Arc<dyn AiProvider>, store: Arc<dyn RowStore>, config: &Config) -> Self {
        let analysis_adapter = Arc::new(AnalysisAdapter::from_config(store, &config.store));

        Self {
            analyzer: CodeAnalyzer::new(ai_provider, Arc::clone(&analysis_adapter)),
            analysis_adapter,
            default_user_id: config.server.default_user_id.clone(),
        }
    }

    /// A missing or blank `X-User-ID` falls back to the configured default.
    pub fn resolve_user_id(&self, header: Option<String>) -> String {
        header
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.default_user_id.clone())
    }
}
