//! Venue resource handlers.
//!
//! The list endpoint doubles as a radius search: when `lat`, `lng` and
//! `radius_km` are all present the repository switches to a distance-ordered
//! haversine query.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use domain::models::venue::{CreateVenueRequest, UpdateVenueRequest, VenueQuery};
use domain::models::Venue;
use persistence::repositories::VenueRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::response::ApiResponse;

pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VenueRepository::new(state.pool()?);
    let venues: Vec<Venue> = repo
        .list(&query)
        .await?
        .into_iter()
        .map(Venue::from)
        .collect();
    Ok(ApiResponse::ok(venues))
}

pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VenueRepository::new(state.pool()?);
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Venue not found".into()))?;
    Ok(ApiResponse::ok(Venue::from(entity)))
}

pub async fn create_venue(
    State(state): State<AppState>,
    Json(request): Json<CreateVenueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = VenueRepository::new(state.pool()?);
    let entity = repo.create(&request).await?;
    tracing::info!(venue_id = %entity.id, "Created venue");
    Ok((StatusCode::CREATED, ApiResponse::ok(Venue::from(entity))))
}

pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVenueRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    let repo = VenueRepository::new(state.pool()?);
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Venue not found".into()))?;
    tracing::info!(venue_id = %id, "Updated venue");
    Ok(ApiResponse::ok(Venue::from(entity)))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VenueRepository::new(state.pool()?);
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Venue not found".into()));
    }
    tracing::info!(venue_id = %id, "Deleted venue");
    Ok(ApiResponse::ok(serde_json::json!({ "id": id })))
}
