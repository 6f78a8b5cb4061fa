//! Storage guard middleware.
//!
//! When the datastore was never configured, every resource request answers
//! with the uniform 500 envelope before any resource logic runs, independent
//! of method and path.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

pub async fn require_storage(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.pool.is_none() {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "Rejecting request: storage is not configured"
        );
        return ApiError::Unconfigured.into_response();
    }
    next.run(req).await
}
