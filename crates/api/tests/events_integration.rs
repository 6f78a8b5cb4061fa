//! Integration tests for event endpoints and the derived publication status.
//!
//! Runs only when `TEST_DATABASE_URL` points at a PostgreSQL database.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, get_request, json_request, parse_response_body, sample_event, test_app,
    try_test_pool,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_event_defaults_and_statuses() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            json!({ "name": "Fall NWTA", "event_type": "nwta" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    let event = &body["data"];
    assert_eq!(event["event_type"], "nwta");
    assert_eq!(event["is_published"], false);
    assert_eq!(event["committed_staff"].as_array().unwrap().len(), 0);
    assert_eq!(event["schedule"].as_array().unwrap().len(), 0);
    // Unpublished, so both audiences are hidden
    assert_eq!(event["staff_status"], "hidden");
    assert_eq!(event["participant_status"], "hidden");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_published_event_without_window_previews() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            sample_event("Winter Training"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["staff_status"], "preview");
    assert_eq!(body["data"]["participant_status"], "preview");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_open_window_goes_full_at_capacity() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let staff = [uuid::Uuid::new_v4(), uuid::Uuid::new_v4()];
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            json!({
                "name": "Spring NWTA",
                "event_type": "nwta",
                "is_published": true,
                "staff_capacity": 2,
                "participant_capacity": 32,
                "committed_staff": staff,
                "staff_open_at": "2000-01-01T00:00:00Z",
                "staff_close_at": "2100-01-01T00:00:00Z",
                "participant_open_at": "2000-01-01T00:00:00Z",
                "participant_close_at": "2100-01-01T00:00:00Z"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["staff_status"], "full");
    assert_eq!(body["data"]["participant_status"], "open");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_past_window_is_closed() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            json!({
                "name": "Last Year's NWTA",
                "event_type": "nwta",
                "is_published": true,
                "participant_open_at": "2000-01-01T00:00:00Z",
                "participant_close_at": "2001-01-01T00:00:00Z"
            }),
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["participant_status"], "closed");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_list_events_filters_by_type_and_published() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    for (name, event_type, published) in [
        ("Fall NWTA", "nwta", true),
        ("Staff Prep", "staffing", true),
        ("Draft Training", "training", false),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/events",
                json!({ "name": name, "event_type": event_type, "is_published": published }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/events?event_type=staffing"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Staff Prep");

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/events?published=true"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // A filter value outside the known types matches nothing
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/events?event_type=festival"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_update_event_schedule_round_trips() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            sample_event("Summer NWTA"),
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/events/{}", id),
            json!({
                "schedule": [
                    { "starts_at": "2026-06-12T16:00:00Z", "ends_at": "2026-06-14T14:00:00Z" }
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let schedule = body["data"]["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0]["starts_at"], "2026-06-12T16:00:00Z");

    cleanup_all_test_data(&pool).await;
}
