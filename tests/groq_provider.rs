use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use review_relay::enums::ai_provider_error::AiProviderError;
use review_relay::services::ai_providers::groq::GroqProvider;
use review_relay::traits::ai_provider::AiProvider;

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}]
    })
}

fn provider(server: &MockServer) -> GroqProvider {
    GroqProvider::new("gsk_test".to_string(), Client::new())
        .with_base_url(&server.uri())
        .with_retry_policy(1, 1)
}

async fn ask(provider: &GroqProvider) -> Result<String, AiProviderError> {
    provider
        .chat("system".to_string(), vec!["Language: rust\n\nCode:\nfn main() {}".to_string()])
        .await
}

#[tokio::test]
async fn sends_json_mode_request_with_bearer_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "response_format": {"type": "json_object"},
            "stream": false,
            "messages": [
                {"role": "system", "content": "system"},
                {"role": "user", "content": "Language: rust\n\nCode:\nfn main() {}"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"issues": []}"#)))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(ask(&provider(&server)).await.unwrap(), r#"{"issues": []}"#);
}

#[tokio::test]
async fn retries_once_after_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(ask(&provider(&server)).await.unwrap(), "{}");
}

#[tokio::test]
async fn gives_up_after_one_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "boom"}})))
        .expect(2)
        .mount(&server)
        .await;

    match ask(&provider(&server)).await {
        Err(AiProviderError::ApiError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn bad_key_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(matches!(
        ask(&provider(&server)).await,
        Err(AiProviderError::AuthenticationError(message)) if message.contains("Invalid API Key")
    ));
}

#[tokio::test]
async fn empty_completion_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    assert!(matches!(ask(&provider(&server)).await, Err(AiProviderError::EmptyCompletion)));
}

#[tokio::test]
async fn slow_model_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("{}"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let provider = provider(&server).with_timeout_secs(1).with_retry_policy(0, 1);
    assert!(matches!(ask(&provider).await, Err(AiProviderError::Timeout(1))));
}
