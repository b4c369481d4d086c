//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use kv_cache::{api::create_router, AppState, Cache, Config, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::from_config(&Config::default()).unwrap();
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn store(app: &Router, body: &'static str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    json["key"].as_str().unwrap().to_string()
}

async fn get(app: &Router, uri: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == STORE Endpoint Tests ==

#[tokio::test]
async fn test_store_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"type":"text","value":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let key = json["key"].as_str().unwrap();
    assert_eq!(key.len(), 36);
    assert!(json["message"].as_str().unwrap().contains(key));
}

#[tokio::test]
async fn test_store_returns_distinct_keys() {
    let app = create_test_app();

    let first = store(&app, r#"{"type":"int","value":1}"#).await;
    let second = store(&app, r#"{"type":"int","value":1}"#).await;

    assert_ne!(first, second);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_round_trip_each_kind() {
    let app = create_test_app();

    let text = store(&app, r#"{"type":"text","value":"hello"}"#).await;
    let bytes = store(&app, r#"{"type":"bytes","value":[99,97,102,195,169]}"#).await;
    let int = store(&app, r#"{"type":"int","value":42}"#).await;
    let float = store(&app, r#"{"type":"float","value":2.5}"#).await;

    let (status, json) = get(&app, format!("/get/{}/str", text)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], "hello");

    let (_, json) = get(&app, format!("/get/{}", bytes)).await;
    assert_eq!(json["value"], serde_json::json!([99, 97, 102, 195, 169]));

    let (_, json) = get(&app, format!("/get/{}/str", bytes)).await;
    assert_eq!(json["value"], "café");

    let (_, json) = get(&app, format!("/get/{}/int", int)).await;
    assert_eq!(json["value"], 42);

    let (_, json) = get(&app, format!("/get/{}/str", float)).await;
    assert_eq!(json["value"], "2.5");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = get(&app, "/get/nonexistent_key".to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_str_invalid_utf8() {
    let app = create_test_app();
    let key = store(&app, r#"{"type":"bytes","value":[255,254]}"#).await;

    let (status, json) = get(&app, format!("/get/{}/str", key)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_int_lenient() {
    let app = create_test_app();
    let key = store(&app, r#"{"type":"text","value":"hello"}"#).await;

    let (status, json) = get(&app, format!("/get/{}/int", key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 0);

    let (status, json) = get(&app, "/get/missing/int".to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 0);
}

// == REPLAY Endpoint Tests ==

#[tokio::test]
async fn test_replay_endpoint() {
    let app = create_test_app();

    let first = store(&app, r#"{"type":"text","value":"foo"}"#).await;
    let second = store(&app, r#"{"type":"int","value":7}"#).await;

    let (status, json) = get(&app, "/replay/Cache.store".to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Cache.store");
    assert_eq!(json["calls"], 2);
    assert_eq!(json["entries"][0]["input"], "('foo',)");
    assert_eq!(json["entries"][0]["output"], first.as_str());
    assert_eq!(json["entries"][1]["input"], "(7,)");
    assert_eq!(json["entries"][1]["output"], second.as_str());
}

#[tokio::test]
async fn test_replay_without_instrumentation() {
    let config = Config {
        count_calls: false,
        call_history: false,
        ..Config::default()
    };
    let app = create_router(AppState::from_config(&config).unwrap());

    store(&app, r#"{"type":"text","value":"foo"}"#).await;
    let (_, json) = get(&app, "/replay/Cache.store".to_string()).await;

    assert_eq!(json["calls"], 0);
    assert_eq!(json["entries"], serde_json::json!([]));
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let cache = Cache::new(MemoryStore::new()).unwrap();
    let app = create_router(AppState::new(cache));

    let key = store(&app, r#"{"type":"text","value":"stats_value"}"#).await;
    get(&app, format!("/get/{}", key)).await; // hit
    get(&app, "/get/nonexistent".to_string()).await; // miss

    let (status, json) = get(&app, "/stats".to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    // value + counter + inputs list + outputs list
    assert_eq!(json["total_entries"].as_u64().unwrap(), 4);
    assert!(json.get("hit_rate").is_some());
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health".to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 400 or 422 for JSON rejections
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_unknown_value_type() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"type":"list","value":[]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
