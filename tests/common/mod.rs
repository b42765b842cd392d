#![allow(dead_code)]

use axum::body::Body;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use stackpad::create_router;
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> axum::Router {
    let state = stackpad::app::AppState {
        db: pool,
        config: stackpad::app::config::Config::for_tests(),
    };
    create_router(state)
}

/// Build a JSON request, optionally authenticated with a bearer token.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> http::Request<Body> {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("invalid JSON body: {}", e))
}

/// Sign up a fresh user. Returns (bearer token, user id).
pub async fn signup(app: &axum::Router, email: &str) -> (String, String) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": email, "password": "Password123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);
    let body = response_json(response).await;
    (
        body["token"].as_str().unwrap().to_string(),
        body["user_id"].as_str().unwrap().to_string(),
    )
}

/// Create an organization; it becomes the caller's active org. Returns its id.
pub async fn create_org(app: &axum::Router, token: &str, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orgs",
            Some(token),
            Some(json!({ "name": name })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);
    response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Add an existing user (by email) to the caller's active organization.
pub async fn add_member(app: &axum::Router, token: &str, email: &str) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orgs/members",
            Some(token),
            Some(json!({ "email": email })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);
}

/// Switch (or clear) the caller's active organization.
pub async fn switch_org(app: &axum::Router, token: &str, org_id: Option<&str>) {
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/session/active-organization",
            Some(token),
            Some(json!({ "organization_id": org_id })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);
}

/// Create a todo, returning its JSON representation.
pub async fn create_todo(app: &axum::Router, token: &str, title: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            Some(token),
            Some(json!({ "title": title })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);
    response_json(response).await
}

/// Create a notification from a raw body, returning its JSON representation.
pub async fn create_notification(app: &axum::Router, token: &str, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notifications",
            Some(token),
            Some(body),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);
    response_json(response).await
}

/// Minimal valid notification body addressed to a single user.
pub fn user_notification_body(user_id: &str, title: &str) -> Value {
    json!({
        "type": "ISSUE_ASSIGNED",
        "title": title,
        "message": "You have been assigned an issue",
        "priority": "MEDIUM",
        "scope": "USER",
        "user_id": user_id,
    })
}

/// Minimal valid notification body addressed to an organization.
pub fn org_notification_body(org_id: &str, title: &str) -> Value {
    json!({
        "type": "ORG_ANNOUNCEMENT",
        "title": title,
        "message": "Hear ye",
        "priority": "LOW",
        "scope": "ORGANIZATION",
        "organization_id": org_id,
    })
}
