//! Integration tests for the HTTP surface that needs no database:
//! health endpoints, public config, CORS preflight, method negotiation and
//! the storage-unconfigured guard.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{degraded_app, get_request, json_request, lazy_app, parse_response_body};
use tower::ServiceExt;

// =============================================================================
// Health endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_degraded_without_storage() {
    let app = degraded_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["configured"], false);
    assert_eq!(body["database"]["connected"], false);
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_liveness_always_ok() {
    let app = degraded_app();

    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_ok_when_storage_unconfigured() {
    let app = degraded_app();

    let response = app.oneshot(get_request("/api/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Public config
// =============================================================================

#[tokio::test]
async fn test_public_config_envelope() {
    let app = degraded_app();

    let response = app
        .oneshot(get_request("/api/v1/config/public"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["auth"]["domain"].is_string());
    assert!(body["data"]["auth"]["client_id"].is_string());
    assert!(body["data"]["maps"]["api_key"].is_string());
}

// =============================================================================
// Storage guard
// =============================================================================

#[tokio::test]
async fn test_unconfigured_storage_returns_enveloped_500() {
    let app = degraded_app();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/people"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Storage is not configured");
}

#[tokio::test]
async fn test_unconfigured_storage_guards_every_resource() {
    let app = degraded_app();

    let uris = [
        "/api/v1/people",
        "/api/v1/warriors",
        "/api/v1/prospects",
        "/api/v1/registrants",
        "/api/v1/igroups",
        "/api/v1/areas",
        "/api/v1/communities",
        "/api/v1/venues",
        "/api/v1/events",
        "/api/v1/transactions",
        "/api/v1/transactions/stats",
        "/api/v1/users",
    ];

    for uri in uris {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "expected guard on {}",
            uri
        );
        let body = parse_response_body(response).await;
        assert_eq!(body["success"], false, "expected envelope on {}", uri);
    }
}

#[tokio::test]
async fn test_unconfigured_storage_guards_writes() {
    let app = degraded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/people",
            serde_json::json!({ "first_name": "Ada", "last_name": "Lovelace" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let id = uuid::Uuid::new_v4();
    let response = app
        .oneshot(common::delete_request(&format!("/api/v1/people/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_not_behind_storage_guard() {
    let app = degraded_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// CORS and method negotiation
// =============================================================================

#[tokio::test]
async fn test_cors_preflight_succeeds_without_storage() {
    let app = degraded_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/people")
        .header(header::ORIGIN, "https://emma.example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_cors_headers_on_actual_request() {
    let app = degraded_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::ORIGIN, "https://emma.example.org")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_unsupported_method_gets_405_with_allow() {
    // A configured (if unreachable) pool so the storage guard passes through
    // to method negotiation.
    let app = lazy_app();

    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/v1/people")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let allow = response
        .headers()
        .get(header::ALLOW)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allow.contains("GET"), "Allow header was {:?}", allow);
    assert!(allow.contains("POST"), "Allow header was {:?}", allow);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = degraded_app();

    let response = app
        .oneshot(get_request("/api/v1/nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_header_present() {
    let app = degraded_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
