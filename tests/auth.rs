use serde_json::json;
use tower::ServiceExt;

mod common;

use crate::common::*;

#[tokio::test]
async fn signup_returns_working_token() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (token, user_id) = signup(&app, "new@example.com").await;

    let response = app
        .oneshot(json_request("GET", "/api/session", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user_id"], user_id);
    assert!(body["active_organization_id"].is_null());
}

#[tokio::test]
async fn signup_duplicate_email_rejected() {
    let pool = test_pool().await;
    let app = test_router(pool);

    signup(&app, "dup@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "dup@example.com", "password": "Password123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_weak_password_rejected() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "email": "weak@example.com", "password": "password" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_issues_fresh_token() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (signup_token, user_id) = signup(&app, "login@example.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "login@example.com", "password": "Password123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user_id"], user_id);
    let login_token = body["token"].as_str().unwrap();
    assert_ne!(login_token, signup_token);

    let session = app
        .oneshot(json_request("GET", "/api/session", Some(login_token), None))
        .await
        .unwrap();
    assert_eq!(session.status(), http::StatusCode::OK);
}

#[tokio::test]
async fn login_wrong_password_rejected() {
    let pool = test_pool().await;
    let app = test_router(pool);

    signup(&app, "wrongpw@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "wrongpw@example.com", "password": "NotThePassword1" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let response = app
        .oneshot(json_request("GET", "/api/todos", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_is_unauthorized() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let response = app
        .oneshot(json_request(
            "GET",
            "/api/todos",
            Some("01ARZ3NDEKTSV4RRFFQ69G5FAV"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_invalidates_token() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (token, _) = signup(&app, "logout@example.com").await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/logout", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::NO_CONTENT);

    let after = app
        .oneshot(json_request("GET", "/api/session", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(after.status(), http::StatusCode::UNAUTHORIZED);
}
