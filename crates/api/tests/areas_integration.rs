//! Integration tests for community and area endpoints, including the
//! boundary-omission behavior on area lists.
//!
//! Runs only when `TEST_DATABASE_URL` points at a PostgreSQL database.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    cleanup_all_test_data, get_request, json_request, parse_response_body, test_app, try_test_pool,
};
use serde_json::json;
use tower::ServiceExt;

fn boundary_doc() -> serde_json::Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [-122.8, 45.4], [-122.5, 45.4], [-122.5, 45.7], [-122.8, 45.7], [-122.8, 45.4]
        ]]
    })
}

async fn create_community(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/communities",
            json!({ "name": "Pacific Northwest", "code": "PNW", "color": "#1a7f37" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_area_list_omits_boundary_by_default() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let community_id = create_community(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/areas",
            json!({
                "name": "Portland Metro",
                "code": "PDX",
                "color": "#205493",
                "community_id": community_id,
                "boundary": boundary_doc()
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    let area_id = created["data"]["id"].as_str().unwrap().to_string();
    // Create responses carry the boundary back
    assert_eq!(created["data"]["boundary"]["type"], "Polygon");

    // Default list drops it entirely
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/areas"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("boundary").is_none(), "boundary leaked: {:?}", rows[0]);

    // Opting in brings it back
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/areas?include_boundary=true"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"][0]["boundary"]["type"], "Polygon");

    // Single fetch always includes it
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/areas/{}", area_id)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["boundary"]["type"], "Polygon");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_area_list_filters_by_community() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    let community_id = create_community(&app).await;

    for (name, code, community) in [
        ("Portland Metro", "PDX", Some(community_id.clone())),
        ("Unaffiliated", "UNA", None),
    ] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/areas",
                json!({
                    "name": name,
                    "code": code,
                    "color": "#205493",
                    "community_id": community
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/areas?community_id={}",
            community_id
        )))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Portland Metro");

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_duplicate_community_code_conflicts() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    create_community(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/communities",
            json!({ "name": "Another PNW", "code": "PNW", "color": "#999999" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);

    cleanup_all_test_data(&pool).await;
}

#[tokio::test]
async fn test_registrant_requires_existing_event() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    cleanup_all_test_data(&pool).await;
    let app = test_app(pool.clone());

    // FK violation surfaces as a not-found on the referenced event
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/registrants",
            json!({
                "event_id": uuid::Uuid::new_v4(),
                "first_name": "Sam",
                "last_name": "Carter",
                "audience": "participant"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    cleanup_all_test_data(&pool).await;
}
