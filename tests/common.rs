use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use review_relay::enums::ai_provider_error::AiProviderError;
use review_relay::enums::store_error::StoreError;
use review_relay::server::app_state::AppState;
use review_relay::structs::config::config::Config;
use review_relay::structs::select_query::SelectQuery;
use review_relay::traits::ai_provider::AiProvider;
use review_relay::traits::row_store::RowStore;

mock! {
    pub Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;
    }
}

pub const STYLE_REPLY: &str = r#"{"issues": [{"issue_type":"style","severity":"low","title":"t","description":"d"}], "optimized_code":"def f():\n    pass", "summary":"ok"}"#;

/// A provider expected to answer exactly once with `reply`.
pub fn replying_provider(reply: &'static str) -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_chat()
        .times(1)
        .returning(move |_, _| Ok(reply.to_string()));
    provider
}

/// Every call fails as if the hosted store were down.
pub struct FailingStore;

#[async_trait]
impl RowStore for FailingStore {
    async fn insert(&self, _table: &str, _rows: Vec<Value>) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Network("connection refused".to_string()))
    }

    async fn select(&self, _table: &str, _query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Status { status: 503, body: "unavailable".to_string() })
    }
}

pub fn app_state(provider: impl AiProvider + 'static, store: Arc<dyn RowStore>) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(provider), store, &Config::default()))
}

pub fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body should be JSON")
}
