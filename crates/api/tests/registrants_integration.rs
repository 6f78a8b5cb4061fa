//! Integration tests for the registrants CRUD endpoints.
//!
//! Registrants require a parent event, so each suite creates one first.
//! Runs only when `TEST_DATABASE_URL` points at a PostgreSQL database.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{
    cleanup_all_test_data, delete_request, get_request, json_request, parse_response_body,
    sample_event, test_app, try_test_pool,
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

async fn create_event(app: &Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/events", sample_event(name)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_registrant_crud_cycle_with_default_status() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());
    let event_id = create_event(&app, "Spring NWTA").await;

    // Create without a status; the row defaults to potential
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/registrants",
            json!({
                "event_id": event_id,
                "first_name": "Theo",
                "last_name": "Ramage",
                "audience": "participant",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["event_id"], event_id.as_str());
    assert_eq!(body["data"]["audience"], "participant");
    assert_eq!(body["data"]["status"], "potential");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Read
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/registrants/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["id"], id.as_str());

    // Commit the registrant with some registration data; names survive
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/registrants/{}", id),
            json!({ "status": "committed", "data": { "diet": "vegetarian" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["status"], "committed");
    assert_eq!(body["data"]["data"]["diet"], "vegetarian");
    assert_eq!(body["data"]["first_name"], "Theo");

    // Delete returns the removed id
    let response = app
        .clone()
        .oneshot(delete_request(&format!("/api/v1/registrants/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["id"], id.as_str());

    // Gone afterwards
    let response = app
        .oneshot(get_request(&format!("/api/v1/registrants/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Registrant not found");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_list_registrants_filters_by_event_and_audience() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let spring = create_event(&app, "Spring NWTA").await;
    let autumn = create_event(&app, "Autumn NWTA").await;

    for (event, first, audience) in [
        (&spring, "Avery", "participant"),
        (&spring, "Bennett", "participant"),
        (&spring, "Cole", "staff"),
        (&autumn, "Dario", "participant"),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/registrants",
                json!({
                    "event_id": event,
                    "first_name": first,
                    "last_name": "Marsh",
                    "audience": audience,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Everyone on the spring event
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/registrants?event_id={}", spring)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Spring participants only
    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/registrants?event_id={}&audience=participant",
            spring
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["audience"] == "participant"));

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_update_missing_registrant_is_404() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let app = test_app(pool);

    let response = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/registrants/{}", Uuid::new_v4()),
            json!({ "status": "cancelled" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Registrant not found");
}
