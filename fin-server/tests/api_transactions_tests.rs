//! Integration tests for transaction API handlers
mod common;

use crate::common::{
    create_test_account, create_test_app_state, create_test_category, create_test_transaction,
    create_test_user, token_for,
};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fin_server::AppState;
use fin_server::routes::build_router;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn authed(method: &str, uri: &str, token: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token));

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// User with one account and one category, ready to transact.
async fn setup_user(state: &AppState, email: &str) -> (i64, i64, i64) {
    let user_id = create_test_user(&state.pool, email).await;
    let account_id = create_test_account(&state.pool, user_id, "Checking").await;
    let category_id = create_test_category(&state.pool, user_id, "Groceries", "expense").await;
    (user_id, account_id, category_id)
}

#[tokio::test]
async fn test_create_transaction_success() {
    let state = create_test_app_state().await;
    let (user_id, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "POST",
            "/api/v1/transactions",
            &token_for(&state, "a@x.com"),
            Some(&format!(
                r#"{{"description": "Weekly shop", "amount": 82.5, "kind": "expense",
                    "account_id": {}, "category_id": {}, "date": "2026-08-01"}}"#,
                account_id, category_id
            )),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["transaction"]["description"], "Weekly shop");
    assert_eq!(json["transaction"]["amount"], 82.5);
    assert_eq!(json["transaction"]["kind"], "expense");
    assert_eq!(json["transaction"]["date"], "2026-08-01");
    assert_eq!(json["transaction"]["user_id"], user_id);
}

#[tokio::test]
async fn test_create_transaction_defaults_date_to_today() {
    let state = create_test_app_state().await;
    let (_, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "POST",
            "/api/v1/transactions",
            &token_for(&state, "a@x.com"),
            Some(&format!(
                r#"{{"description": "Coffee", "amount": 4.5, "kind": "expense",
                    "account_id": {}, "category_id": {}}}"#,
                account_id, category_id
            )),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(json["transaction"]["date"], today);
}

#[tokio::test]
async fn test_create_transaction_zero_amount_rejected() {
    let state = create_test_app_state().await;
    let (_, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "POST",
            "/api/v1/transactions",
            &token_for(&state, "a@x.com"),
            Some(&format!(
                r#"{{"description": "Nothing", "amount": 0.0, "kind": "expense",
                    "account_id": {}, "category_id": {}}}"#,
                account_id, category_id
            )),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "amount");
}

#[tokio::test]
async fn test_create_transaction_foreign_account_rejected() {
    let state = create_test_app_state().await;
    let (_, foreign_account, _) = setup_user(&state, "a@x.com").await;
    let (_, _, own_category) = setup_user(&state, "b@x.com").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "POST",
            "/api/v1/transactions",
            &token_for(&state, "b@x.com"),
            Some(&format!(
                r#"{{"description": "Sneaky", "amount": 10.0, "kind": "expense",
                    "account_id": {}, "category_id": {}}}"#,
                foreign_account, own_category
            )),
        ))
        .await
        .unwrap();

    // Someone else's account id is treated as nonexistent
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "account_id");
}

#[tokio::test]
async fn test_create_transaction_foreign_category_rejected() {
    let state = create_test_app_state().await;
    let (_, _, foreign_category) = setup_user(&state, "a@x.com").await;
    let (_, own_account, _) = setup_user(&state, "b@x.com").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "POST",
            "/api/v1/transactions",
            &token_for(&state, "b@x.com"),
            Some(&format!(
                r#"{{"description": "Sneaky", "amount": 10.0, "kind": "expense",
                    "account_id": {}, "category_id": {}}}"#,
                own_account, foreign_category
            )),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "category_id");
}

#[tokio::test]
async fn test_list_transactions_scoped_to_caller() {
    let state = create_test_app_state().await;
    let (owner, account_id, category_id) = setup_user(&state, "a@x.com").await;
    setup_user(&state, "b@x.com").await;
    create_test_transaction(&state.pool, owner, account_id, category_id, "Weekly shop").await;
    let app = build_router(state.clone());

    let own = app
        .clone()
        .oneshot(authed(
            "GET",
            "/api/v1/transactions",
            &token_for(&state, "a@x.com"),
            None,
        ))
        .await
        .unwrap();
    let foreign = app
        .oneshot(authed(
            "GET",
            "/api/v1/transactions",
            &token_for(&state, "b@x.com"),
            None,
        ))
        .await
        .unwrap();

    let own_json = body_json(own).await;
    let foreign_json = body_json(foreign).await;
    assert_eq!(own_json["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(foreign_json["transactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_foreign_transaction_not_found() {
    let state = create_test_app_state().await;
    let (owner, account_id, category_id) = setup_user(&state, "a@x.com").await;
    setup_user(&state, "b@x.com").await;
    let transaction_id =
        create_test_transaction(&state.pool, owner, account_id, category_id, "Weekly shop").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "GET",
            &format!("/api/v1/transactions/{}", transaction_id),
            &token_for(&state, "b@x.com"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_transaction_amount_only_leaves_rest() {
    let state = create_test_app_state().await;
    let (owner, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let transaction_id =
        create_test_transaction(&state.pool, owner, account_id, category_id, "Weekly shop").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "PUT",
            &format!("/api/v1/transactions/{}", transaction_id),
            &token_for(&state, "a@x.com"),
            Some(r#"{"amount": 90.0}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["transaction"]["amount"], 90.0);
    assert_eq!(json["transaction"]["description"], "Weekly shop");
    assert_eq!(json["transaction"]["kind"], "expense");
    assert_eq!(json["transaction"]["date"], "2026-08-01");
    assert_eq!(json["transaction"]["account_id"], account_id);
}

#[tokio::test]
async fn test_update_transaction_foreign_category_rejected() {
    let state = create_test_app_state().await;
    let (owner, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let (_, _, foreign_category) = setup_user(&state, "b@x.com").await;
    let transaction_id =
        create_test_transaction(&state.pool, owner, account_id, category_id, "Weekly shop").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "PUT",
            &format!("/api/v1/transactions/{}", transaction_id),
            &token_for(&state, "a@x.com"),
            Some(&format!(r#"{{"category_id": {}}}"#, foreign_category)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_transaction_names_resource() {
    let state = create_test_app_state().await;
    let (owner, account_id, category_id) = setup_user(&state, "a@x.com").await;
    let transaction_id =
        create_test_transaction(&state.pool, owner, account_id, category_id, "Weekly shop").await;
    let app = build_router(state.clone());

    let response = app
        .oneshot(authed(
            "DELETE",
            &format!("/api/v1/transactions/{}", transaction_id),
            &token_for(&state, "a@x.com"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("Weekly shop"));
}
