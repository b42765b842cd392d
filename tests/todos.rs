use serde_json::json;
use tower::ServiceExt;

mod common;

use crate::common::*;

#[tokio::test]
async fn create_requires_authentication() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/todos",
            None,
            Some(json!({ "title": "buy milk" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_empty_title_rejected() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (token, _) = signup(&app, "a@example.com").await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/todos",
            Some(&token),
            Some(json!({ "title": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
}

// Personal todo lifecycle: stamped to its creator only, untouchable by
// anyone else, mutable by its owner.
#[tokio::test]
async fn personal_todo_lifecycle() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, alice_id) = signup(&app, "alice@example.com").await;
    let todo = create_todo(&app, &alice, "buy milk").await;

    assert_eq!(todo["user_id"], alice_id);
    assert!(todo["organization_id"].is_null());
    assert_eq!(todo["completed"], false);
    assert_eq!(todo["created_at"], todo["updated_at"]);

    let todo_id = todo["id"].as_str().unwrap();

    // Another user, even one with an active org, is rejected
    let (bob, _) = signup(&app, "bob@example.com").await;
    create_org(&app, &bob, "Bobs Org").await;
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/todos/{}", todo_id),
            Some(&bob),
            Some(json!({ "completed": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::FORBIDDEN);

    // The rejected write must not have landed
    let response = app
        .clone()
        .oneshot(json_request("GET", "/api/todos", Some(&alice), None))
        .await
        .unwrap();
    let todos = response_json(response).await;
    assert_eq!(todos[0]["completed"], false);

    // The owner completes it
    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/todos/{}", todo_id),
            Some(&alice),
            Some(json!({ "completed": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["completed"], true);
    assert!(updated["updated_at"].as_i64().unwrap() >= updated["created_at"].as_i64().unwrap());
}

// Any member of the stamping org may delete, creator or not.
#[tokio::test]
async fn org_member_can_delete_shared_todo() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, _) = signup(&app, "alice@example.com").await;
    let org_id = create_org(&app, &alice, "Acme").await;
    let (carol, _) = signup(&app, "carol@example.com").await;
    add_member(&app, &alice, "carol@example.com").await;
    switch_org(&app, &carol, Some(&org_id)).await;

    let todo = create_todo(&app, &alice, "shared task").await;
    assert_eq!(todo["organization_id"], org_id);
    let todo_id = todo["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/todos/{}", todo_id),
            Some(&carol),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::NO_CONTENT);

    // Delete is not idempotent: the record is gone now
    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/todos/{}", todo_id),
            Some(&alice),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_member_cannot_touch_org_todo() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, _) = signup(&app, "alice@example.com").await;
    create_org(&app, &alice, "Acme").await;
    let todo = create_todo(&app, &alice, "org task").await;
    let todo_id = todo["id"].as_str().unwrap();

    let (mallory, _) = signup(&app, "mallory@example.com").await;
    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/todos/{}", todo_id),
            Some(&mallory),
            Some(json!({ "title": "hijacked" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::FORBIDDEN);
}

// Ownership stamps survive any patch payload.
#[tokio::test]
async fn stamps_are_immutable() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, alice_id) = signup(&app, "alice@example.com").await;
    let todo = create_todo(&app, &alice, "mine").await;
    let todo_id = todo["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/todos/{}", todo_id),
            Some(&alice),
            Some(json!({
                "completed": true,
                "user_id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
                "organization_id": "01ARZ3NDEKTSV4RRFFQ69G5FAV"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["user_id"], alice_id);
    assert!(updated["organization_id"].is_null());
}

#[tokio::test]
async fn mutate_missing_todo_not_found() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (token, _) = signup(&app, "a@example.com").await;
    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/todos/01ARZ3NDEKTSV4RRFFQ69G5FAV",
            Some(&token),
            Some(json!({ "completed": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
}

// Union of personal and org slices: a record matching both appears once,
// and repeated reads come back in the same order.
#[tokio::test]
async fn list_merges_dedupes_and_sorts() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, _) = signup(&app, "alice@example.com").await;
    create_todo(&app, &alice, "personal 1").await;
    create_todo(&app, &alice, "personal 2").await;

    let org_id = create_org(&app, &alice, "Acme").await;
    // Created under the active org: satisfies both the by-user and by-org queries
    create_todo(&app, &alice, "both worlds").await;

    let (bob, _) = signup(&app, "bob@example.com").await;
    add_member(&app, &alice, "bob@example.com").await;
    switch_org(&app, &bob, Some(&org_id)).await;
    create_todo(&app, &bob, "org task 1").await;
    create_todo(&app, &bob, "org task 2").await;

    let response = app
        .clone()
        .oneshot(json_request("GET", "/api/todos", Some(&alice), None))
        .await
        .unwrap();
    let first = response_json(response).await;
    let todos = first.as_array().unwrap();

    assert_eq!(todos.len(), 5, "3 user-owned + 3 org-owned with 1 overlap");

    let mut ids: Vec<&str> = todos.iter().map(|t| t["id"].as_str().unwrap()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5, "no duplicate ids");

    let stamps: Vec<i64> = todos
        .iter()
        .map(|t| t["created_at"].as_i64().unwrap())
        .collect();
    assert!(
        stamps.windows(2).all(|w| w[0] >= w[1]),
        "newest first: {:?}",
        stamps
    );

    // Same call again, no writes in between: identical ordered result
    let response = app
        .oneshot(json_request("GET", "/api/todos", Some(&alice), None))
        .await
        .unwrap();
    let second = response_json(response).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_without_org_sees_only_own_todos() {
    let pool = test_pool().await;
    let app = test_router(pool);

    let (alice, _) = signup(&app, "alice@example.com").await;
    create_org(&app, &alice, "Acme").await;
    create_todo(&app, &alice, "org task").await;

    let (bob, _) = signup(&app, "bob@example.com").await;
    add_member(&app, &alice, "bob@example.com").await;
    // Bob is a member but has not switched: personal context only
    let response = app
        .oneshot(json_request("GET", "/api/todos", Some(&bob), None))
        .await
        .unwrap();
    let todos = response_json(response).await;
    assert_eq!(todos.as_array().unwrap().len(), 0);
}
