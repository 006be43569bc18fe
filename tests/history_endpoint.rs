use std::sync::Arc;

use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use review_relay::server::review_server::routes;
use review_relay::services::stores::memory_store::MemoryStore;

use crate::common::{app_state, json_body, replying_provider, FailingStore, MockProvider};

async fn submit<F>(filter: &F, user: &str, code: &str)
where
    F: Filter + 'static,
    F::Extract: Reply + Send,
{
    let response = warp::test::request()
        .method("POST")
        .path("/api/v1/analyze")
        .header("x-user-id", user)
        .json(&json!({"code": code, "language": "python", "file_name": "main.py"}))
        .reply(filter)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn returns_only_callers_records_newest_first() {
    let mut provider = MockProvider::new();
    provider
        .expect_chat()
        .times(3)
        .returning(|_, _| Ok(r#"{"issues": [], "summary": "clean"}"#.to_string()));

    let filter = routes(app_state(provider, Arc::new(MemoryStore::new())), &[]);
    submit(&filter, "u1", "first = 1").await;
    submit(&filter, "u2", "other = 1").await;
    submit(&filter, "u1", "second = 2").await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/v1/history")
        .header("x-user-id", "u1")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.body());
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["code_snippet"], "second = 2");
    assert_eq!(records[1]["code_snippet"], "first = 1");
    assert_eq!(records[0]["user_id"], "u1");
    assert_eq!(records[0]["file_name"], "main.py");
    assert_eq!(records[0]["summary"], "clean");
    assert_eq!(records[0]["issues_count"], 0);
    assert!(records[0]["id"].is_string());
    assert!(records[0]["created_at"].is_string());
}

#[tokio::test]
async fn unknown_user_gets_empty_list() {
    let filter = routes(app_state(replying_provider("{}"), Arc::new(MemoryStore::new())), &[]);
    submit(&filter, "demo-user", "x = 1").await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/v1/history")
        .header("x-user-id", "nobody")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.body()), json!([]));
}

#[tokio::test]
async fn default_user_history_without_header() {
    let filter = routes(app_state(replying_provider("{}"), Arc::new(MemoryStore::new())), &[]);
    submit(&filter, "demo-user", "x = 1").await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/v1/history")
        .reply(&filter)
        .await;

    assert_eq!(json_body(response.body()).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn store_outage_yields_empty_list() {
    let mut provider = MockProvider::new();
    provider.expect_chat().never();
    let filter = routes(app_state(provider, Arc::new(FailingStore)), &[]);

    let response = warp::test::request()
        .method("GET")
        .path("/api/v1/history")
        .header("x-user-id", "u1")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.body()), json!([]));
}
