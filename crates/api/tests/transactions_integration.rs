//! Integration tests for transaction endpoints and the stats aggregate.
//!
//! Runs only when `TEST_DATABASE_URL` points at a PostgreSQL database.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, get_request, json_request, parse_response_body, test_app, try_test_pool,
};
use serde_json::json;
use tower::ServiceExt;

async fn post_transaction(app: &axum::Router, payload: serde_json::Value) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/transactions", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}

#[tokio::test]
async fn test_create_transaction_defaults() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let body = post_transaction(
        &app,
        json!({ "transaction_type": "payment", "method": "cash", "amount_cents": 12500 }),
    )
    .await;
    assert_eq!(body["data"]["transaction_type"], "payment");
    assert_eq!(body["data"]["method"], "cash");
    assert_eq!(body["data"]["amount_cents"], 12500);
    assert_eq!(body["data"]["sort_order"], 0);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_list_transactions_by_person_matches_either_side() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    // Person on the payor side of one row and payee side of another
    let person = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/people",
            json!({ "first_name": "Robin", "last_name": "Okafor" }),
        ))
        .await
        .unwrap();
    let person_id = parse_response_body(person).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    post_transaction(
        &app,
        json!({
            "payor_id": person_id,
            "transaction_type": "payment",
            "method": "credit",
            "amount_cents": 40000
        }),
    )
    .await;
    post_transaction(
        &app,
        json!({
            "payee_id": person_id,
            "transaction_type": "reimbursement",
            "method": "check",
            "amount_cents": 7500
        }),
    )
    .await;
    post_transaction(
        &app,
        json!({ "transaction_type": "expense", "method": "cash", "amount_cents": 100 }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/transactions?person_id={}",
            person_id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_stats_totals_and_net() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    // Two payments, one refund, one expense:
    // net = 10000 + 5000 - 2000 - 1500 = 11500
    for (kind, method, amount) in [
        ("payment", "cash", 10000),
        ("payment", "credit", 5000),
        ("refund", "credit", 2000),
        ("expense", "check", 1500),
    ] {
        post_transaction(
            &app,
            json!({ "transaction_type": kind, "method": method, "amount_cents": amount }),
        )
        .await;
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/transactions/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let stats = &body["data"];
    assert_eq!(stats["total_count"], 4);
    assert_eq!(stats["net_cents"], 11500);

    let by_type = stats["totals_by_type"].as_array().unwrap();
    let payments = by_type
        .iter()
        .find(|t| t["transaction_type"] == "payment")
        .unwrap();
    assert_eq!(payments["count"], 2);
    assert_eq!(payments["total_cents"], 15000);

    let by_method = stats["totals_by_method"].as_array().unwrap();
    let credit = by_method.iter().find(|m| m["method"] == "credit").unwrap();
    assert_eq!(credit["count"], 2);
    assert_eq!(credit["total_cents"], 7000);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_stats_on_empty_ledger() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let response = app
        .oneshot(get_request("/api/v1/transactions/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["total_count"], 0);
    assert_eq!(body["data"]["net_cents"], 0);
    assert_eq!(body["data"]["totals_by_type"].as_array().unwrap().len(), 0);
}
