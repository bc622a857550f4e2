//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint over in-memory backends.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cached_crud::{
    api::create_router,
    cache::{CacheStore, MemoryCache},
    models::User,
    store::{MemoryStore, PersistentStore},
    AppState, UserService,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::in_memory())
}

fn create_app_with(store: Arc<MemoryStore>, cache: Arc<MemoryCache>) -> Router {
    create_router(AppState::new(UserService::new(store, cache)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_user(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/user")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_user(id: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/user/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == Create ==

#[tokio::test]
async fn test_create_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(post_user(r#"{"id":"100","name":"grace"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    let inserted = json["id"].as_str().unwrap();
    assert!(!inserted.is_empty());
    assert_ne!(inserted, "100");
}

#[tokio::test]
async fn test_create_duplicate_id_is_accepted() {
    let store = Arc::new(MemoryStore::new());
    let app = create_app_with(store.clone(), Arc::new(MemoryCache::new()));

    for name in ["first", "second"] {
        let body = format!(r#"{{"id":"dup","name":"{}"}}"#, name);
        let response = app.clone().oneshot(post_user(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(store.count().await.unwrap(), 2);

    let response = app.oneshot(get("/user/dup")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "second");
}

#[tokio::test]
async fn test_create_missing_name() {
    let app = create_test_app();

    let response = app.oneshot(post_user(r#"{"id":"1"}"#)).await.unwrap();

    // Axum returns 422 for JSON that does not match the target type
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_create_empty_id() {
    let app = create_test_app();

    let response = app
        .oneshot(post_user(r#"{"id":"","name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_long_id_accepted_by_create_and_update() {
    let app = create_test_app();
    let id = "7".repeat(300);

    let body = format!(r#"{{"id":"{}","name":"long"}}"#, id);
    let response = app.clone().oneshot(post_user(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(put_user(&id, r#"{"name":"longer"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get(&format!("/user/{}", id))).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"].as_str().unwrap(), id);
    assert_eq!(json["name"], "longer");
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app.oneshot(post_user(r#"{"invalid json"#)).await.unwrap();

    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

// == Get ==

#[tokio::test]
async fn test_create_then_get() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_user(r#"{"id":"7","name":"linus"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/user/7")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": "7", "name": "linus"}));
}

#[tokio::test]
async fn test_get_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get("/user/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_get_repairs_cache_from_store() {
    let store = Arc::new(MemoryStore::with_users([User::new("5", "stored")]));
    let cache = Arc::new(MemoryCache::new());
    let app = create_app_with(store, cache.clone());

    let response = app.oneshot(get("/user/5")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(cache.get("user:5").await.unwrap().is_some());
}

// == List ==

#[tokio::test]
async fn test_list_cold_cache_backfills() {
    let store = Arc::new(MemoryStore::with_users([
        User::new("1", "a"),
        User::new("2", "b"),
        User::new("3", "c"),
    ]));
    let cache = Arc::new(MemoryCache::new());
    let app = create_app_with(store, cache.clone());

    let response = app.clone().oneshot(get("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    assert_eq!(cache.keys().await.unwrap().len(), 3);

    let response = app.oneshot(get("/stats")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cached_entries"], 3);
    assert_eq!(json["stored_entries"], 3);
}

#[tokio::test]
async fn test_list_empty() {
    let app = create_test_app();

    let response = app.oneshot(get("/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

// == Update ==

#[tokio::test]
async fn test_update_existing_user() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_user(r#"{"id":"1","name":"old"}"#))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(put_user("1", r#"{"name":"new"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("updated"));

    let response = app.oneshot(get("/user/1")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "new");
}

#[tokio::test]
async fn test_update_nonexistent_user_creates_cache_only_entry() {
    let store = Arc::new(MemoryStore::new());
    let app = create_app_with(store.clone(), Arc::new(MemoryCache::new()));

    let response = app
        .clone()
        .oneshot(put_user("ghost", r#"{"name":"casper"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/user/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": "ghost", "name": "casper"}));

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_empty_body() {
    let app = create_test_app();

    let response = app.oneshot(put_user("1", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Delete ==

#[tokio::test]
async fn test_delete_then_get() {
    let app = create_test_app();

    app.clone()
        .oneshot(post_user(r#"{"id":"9","name":"x"}"#))
        .await
        .unwrap();

    let response = app.clone().oneshot(delete("/user/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["deleted"], 1);

    let response = app.oneshot(get("/user/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_succeeds() {
    let app = create_test_app();

    let response = app.oneshot(delete("/user/none")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["deleted"], 0);
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
